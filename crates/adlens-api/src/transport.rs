// Shared transport configuration for building reqwest::Client instances.
//
// The REST client injects the data store's `apikey` and `Authorization`
// headers through this module so the builder logic lives in one place.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// TLS verification mode. Self-hosted stores often run behind
/// self-signed certificates.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Accept any certificate.
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` carrying the store's auth headers.
    ///
    /// PostgREST expects the key both as `apikey` and as a bearer token.
    pub fn build_client(&self, api_key: &SecretString) -> Result<reqwest::Client, Error> {
        let mut headers = HeaderMap::new();
        let key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|_| Error::InvalidApiKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|_| Error::InvalidApiKey)?;
        headers.insert("apikey", key_value);
        headers.insert(AUTHORIZATION, bearer);

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("adlens/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);

        if matches!(self.tls, TlsMode::DangerAcceptInvalid) {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(builder.build()?)
    }
}
