//! Shared configuration for the adlens CLI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `adlens_core::StoreConfig`. The CLI layers its
//! flag overrides on top of what this crate resolves.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use adlens_core::StoreConfig;

/// Env var that short-circuits key resolution for any profile.
const API_KEY_ENV: &str = "ADLENS_API_KEY";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API key configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named data store profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            page_size: default_page_size(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}

fn default_color() -> String {
    "auto".into()
}

fn default_page_size() -> usize {
    adlens_core::DEFAULT_PAGE_SIZE
}

/// One data store connection profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Base URL of the data store, e.g. `https://myproject.example.co`.
    #[serde(default)]
    pub store_url: Option<String>,

    /// Plaintext API key. Prefer the keyring or `ADLENS_API_KEY`.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Accept self-signed TLS certificates.
    #[serde(default)]
    pub insecure: Option<bool>,

    /// Use the offline sample backend instead of a remote store.
    #[serde(default)]
    pub mock: Option<bool>,
}

// ── Paths and loading ───────────────────────────────────────────────

/// Platform config file location, e.g. `~/.config/adlens/config.toml`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "adlens")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("adlens.toml"))
}

/// Load configuration from `path`, layered under `ADLENS_*` env vars.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ADLENS_CONFIG_").split("__"))
        .extract()?;
    Ok(config)
}

/// Load the user's configuration, falling back to defaults when no
/// file exists or it fails to parse.
pub fn load_config_or_default() -> Config {
    load_config_from(&config_path()).unwrap_or_default()
}

/// Persist `config` to `path`, creating parent directories as needed.
pub fn save_config(config: &Config, path: &std::path::Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

/// A starter config with one mock profile, written by `config init`.
pub fn starter_config() -> Config {
    let mut profiles = HashMap::new();
    profiles.insert(
        "default".to_owned(),
        Profile {
            mock: Some(true),
            ..Profile::default()
        },
    );
    Config {
        default_profile: Some("default".into()),
        defaults: Defaults::default(),
        profiles,
    }
}

/// The profile name to use: explicit flag, then the config's default,
/// then `"default"`.
pub fn active_profile_name(explicit: Option<&str>, config: &Config) -> String {
    explicit
        .map(ToOwned::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the API key for a profile: env var, then OS keyring, then
/// plaintext config, in that order.
pub fn resolve_api_key(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Environment
    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.is_empty() {
            return Ok(SecretString::from(key));
        }
    }

    // 2. Keyring
    if let Ok(entry) = keyring::Entry::new("adlens", &format!("{profile_name}/api_key")) {
        if let Ok(key) = entry.get_password() {
            return Ok(SecretString::from(key));
        }
    }

    // 3. Plaintext in config
    if let Some(ref key) = profile.api_key {
        return Ok(SecretString::from(key.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store an API key in the OS keyring for a profile.
pub fn store_api_key(profile_name: &str, key: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new("adlens", &format!("{profile_name}/api_key")).map_err(|e| {
        ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        }
    })?;
    entry.set_password(key).map_err(|e| ConfigError::Validation {
        field: "keyring".into(),
        reason: e.to_string(),
    })
}

// ── Translation to core config ──────────────────────────────────────

/// Build a `StoreConfig` from a profile — no CLI flag overrides.
pub fn profile_to_store_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<StoreConfig, ConfigError> {
    let url_str = profile
        .store_url
        .as_deref()
        .ok_or_else(|| ConfigError::Validation {
            field: "store_url".into(),
            reason: format!("profile '{profile_name}' has no store_url"),
        })?;

    let url: url::Url = url_str.parse().map_err(|_| ConfigError::Validation {
        field: "store_url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let api_key = resolve_api_key(profile, profile_name)?;

    Ok(StoreConfig {
        url,
        api_key,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(30)),
        accept_invalid_certs: profile.insecure.unwrap_or(false),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(toml_text: &str) -> Config {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn minimal_config_gets_defaults() {
        let config = parse("");
        assert_eq!(config.defaults.output, "table");
        assert_eq!(config.defaults.page_size, 10);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn profile_round_trips_through_toml() {
        let config = parse(
            r#"
            default_profile = "prod"

            [defaults]
            output = "json"
            page_size = 25

            [profiles.prod]
            store_url = "https://myproject.example.co"
            timeout = 10
            insecure = true

            [profiles.offline]
            mock = true
            "#,
        );
        assert_eq!(config.default_profile.as_deref(), Some("prod"));
        assert_eq!(config.defaults.page_size, 25);

        let prod = &config.profiles["prod"];
        assert_eq!(
            prod.store_url.as_deref(),
            Some("https://myproject.example.co")
        );
        assert_eq!(prod.timeout, Some(10));
        assert_eq!(prod.insecure, Some(true));
        assert_eq!(config.profiles["offline"].mock, Some(true));
    }

    #[test]
    fn explicit_profile_wins() {
        let config = parse("default_profile = \"prod\"");
        assert_eq!(active_profile_name(Some("staging"), &config), "staging");
        assert_eq!(active_profile_name(None, &config), "prod");
        assert_eq!(
            active_profile_name(None, &Config { default_profile: None, ..Config::default() }),
            "default"
        );
    }

    #[test]
    fn store_config_requires_url() {
        let profile = Profile {
            api_key: Some("svc-key".into()),
            ..Profile::default()
        };
        let err = profile_to_store_config(&profile, "p").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn store_config_rejects_bad_url() {
        let profile = Profile {
            store_url: Some("not a url".into()),
            api_key: Some("svc-key".into()),
            ..Profile::default()
        };
        assert!(profile_to_store_config(&profile, "p").is_err());
    }

    #[test]
    fn plaintext_key_is_the_last_resort() {
        let profile = Profile {
            store_url: Some("https://myproject.example.co".into()),
            api_key: Some("svc-key".into()),
            ..Profile::default()
        };
        let store = profile_to_store_config(&profile, "nonexistent-profile").unwrap();
        assert_eq!(store.timeout, Duration::from_secs(30));
        assert!(!store.accept_invalid_certs);
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_config(&starter_config(), &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles["default"].mock, Some(true));
    }
}
