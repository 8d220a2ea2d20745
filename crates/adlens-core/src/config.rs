// ── Data store connection settings ──

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use adlens_api::{Backend, MockBackend, RestClient, TlsMode, TransportConfig};

use crate::error::CoreError;

/// Everything needed to reach the remote data store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: Url,
    pub api_key: SecretString,
    pub timeout: Duration,
    /// Accept self-signed certificates (self-hosted stores).
    pub accept_invalid_certs: bool,
}

impl StoreConfig {
    /// Build a REST backend from this configuration.
    pub fn backend(&self) -> Result<Backend, CoreError> {
        let transport = TransportConfig {
            tls: if self.accept_invalid_certs {
                TlsMode::DangerAcceptInvalid
            } else {
                TlsMode::System
            },
            timeout: self.timeout,
        };
        let client = RestClient::new(self.url.clone(), &self.api_key, &transport)?;
        Ok(Backend::Rest(client))
    }
}

/// The offline backend with sample data — no configuration required.
pub fn mock_backend() -> Backend {
    Backend::Mock(MockBackend::new())
}
