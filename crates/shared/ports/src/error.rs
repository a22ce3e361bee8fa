use thiserror::Error;

/// Failures reported by an exchange transport
///
/// Any of these means the order is not confirmed placed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (code {code}): {msg}")]
    Api { code: i64, msg: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Failed to parse exchange response: {0}")]
    Parse(String),
}

pub type TransportResult<T> = std::result::Result<T, TransportError>;
