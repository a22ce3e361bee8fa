//! Error types for the gateway crate

use hermes_ports::TransportError;
use thiserror::Error;

/// Exchange codes meaning the key, signature or permissions were rejected
const AUTH_CODES: [i64; 3] = [-2014, -2015, -1022];

/// Errors raised while talking to the REST API
#[derive(Error, Debug)]
pub enum RestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {code} - {msg} (HTTP {status})")]
    Api { status: u16, code: i64, msg: String },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl RestError {
    fn is_auth(&self) -> bool {
        match self {
            RestError::Api { status, code, .. } => {
                matches!(status, 401 | 403) || AUTH_CODES.contains(code)
            }
            RestError::Status { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}

/// Convert infrastructure RestError to the port's TransportError
impl From<RestError> for TransportError {
    fn from(err: RestError) -> Self {
        if err.is_auth() {
            return TransportError::Auth(err.to_string());
        }
        match err {
            RestError::Http(e) => TransportError::Network(e.to_string()),
            RestError::Api { code, msg, .. } => TransportError::Api { code, msg },
            RestError::Status { status, body } => {
                TransportError::Network(format!("HTTP {}: {}", status, body))
            }
            RestError::Parse(msg) => TransportError::Parse(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_api() {
        let err: TransportError = RestError::Api {
            status: 400,
            code: -2019,
            msg: "Margin is insufficient.".to_string(),
        }
        .into();
        assert_eq!(
            err,
            TransportError::Api {
                code: -2019,
                msg: "Margin is insufficient.".to_string()
            }
        );
    }

    #[test]
    fn test_auth_by_code_or_status() {
        let bad_key = RestError::Api {
            status: 400,
            code: -2015,
            msg: "Invalid API-key, IP, or permissions for action.".to_string(),
        };
        assert!(matches!(TransportError::from(bad_key), TransportError::Auth(_)));

        let forbidden = RestError::Status {
            status: 403,
            body: String::new(),
        };
        assert!(matches!(TransportError::from(forbidden), TransportError::Auth(_)));
    }

    #[test]
    fn test_bare_status_is_network() {
        let err = RestError::Status {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(
            TransportError::from(err),
            TransportError::Network("HTTP 502: Bad Gateway".to_string())
        );
    }
}
