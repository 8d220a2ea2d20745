// ── API error types ──
//
// Transport-layer failures surfaced to `adlens-core`. Consumers of the
// core never see these directly -- `CoreError` translates them.

use thiserror::Error;

/// Unified error type for the api crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("data store rejected the request ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed: {message}")]
    Authentication { message: String },

    #[error("invalid data store URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("malformed API key")]
    InvalidApiKey,

    #[error("unexpected response body: {message}")]
    Deserialization { message: String },
}

impl Error {
    /// Build an [`Error`] from a non-success response, draining the body
    /// for the store's error message.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".into());

        if status == 401 || status == 403 {
            Self::Authentication { message }
        } else {
            Self::Api { status, message }
        }
    }
}
