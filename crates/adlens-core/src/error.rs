// ── Core error types ──
//
// User-facing errors from adlens-core. Consumers never see raw HTTP
// status codes or reqwest failures directly; the `From<adlens_api::Error>`
// impl translates transport-layer errors into domain variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("data store request failed: {message}")]
    Store {
        message: String,
        status: Option<u16>,
    },

    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound {
        entity: &'static str,
        identifier: String,
    },

    #[error("invalid {field}: {reason}")]
    ValidationFailed { field: String, reason: String },

    #[error("cannot convert {entity} row '{id}': {reason}")]
    Conversion {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl From<adlens_api::Error> for CoreError {
    fn from(err: adlens_api::Error) -> Self {
        match err {
            adlens_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            adlens_api::Error::Api { status, message } => CoreError::Store {
                message,
                status: Some(status),
            },
            adlens_api::Error::Transport(e) => CoreError::Store {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            },
            adlens_api::Error::Deserialization { message } => CoreError::Store {
                message,
                status: None,
            },
            adlens_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("invalid data store URL: {e}"),
            },
            adlens_api::Error::InvalidApiKey => CoreError::Config {
                message: "malformed API key".into(),
            },
        }
    }
}
