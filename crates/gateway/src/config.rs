//! Client configuration
//!
//! Values come from the process environment (a `.env` file is loaded by the
//! binary before this runs):
//!
//! | Variable                 | Default                              |
//! |--------------------------|--------------------------------------|
//! | `API_KEY`                | required                             |
//! | `SECRET_KEY`             | required                             |
//! | `BINANCE_FUTURES_URL`    | `https://testnet.binancefuture.com`  |
//! | `BINANCE_RECV_WINDOW_MS` | `5000`                               |
//! | `BINANCE_TIMEOUT_SECS`   | `10`                                 |

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Futures testnet REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";

const DEFAULT_RECV_WINDOW_MS: u64 = 5000;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    MissingVar(&'static str),

    #[error("{var} has an invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub secret_key: String,
    pub base_url: String,
    /// Milliseconds a signed request stays valid after its timestamp
    pub recv_window_ms: u64,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("API_KEY").ok_or(ConfigError::MissingVar("API_KEY"))?;
        let secret_key = get("SECRET_KEY").ok_or(ConfigError::MissingVar("SECRET_KEY"))?;

        let mut config = Self::new(api_key, secret_key);
        if let Some(url) = get("BINANCE_FUTURES_URL") {
            config = config.with_base_url(url);
        }
        if let Some(raw) = get("BINANCE_RECV_WINDOW_MS") {
            config.recv_window_ms = parse_u64("BINANCE_RECV_WINDOW_MS", &raw)?;
        }
        if let Some(raw) = get("BINANCE_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_u64("BINANCE_TIMEOUT_SECS", &raw)?);
        }
        Ok(config)
    }
}

fn parse_u64(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            reason: e.to_string(),
        })
}

// Keep the secret out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("timeout", &self.timeout)
            .finish()
    }
}
