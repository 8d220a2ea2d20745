//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use adlens_config::ConfigError;
use adlens_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input validation ─────────────────────────────────────────────

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(adlens::validation))]
    Validation { field: String, reason: String },

    #[error("Invalid {field} range")]
    #[diagnostic(
        code(adlens::invalid_range),
        help(
            "Range bounds must be numbers ≥ 0 with min ≤ max.\n\
             Leave a side empty to keep it unbounded."
        )
    )]
    InvalidRange { field: &'static str },

    // ── Configuration ────────────────────────────────────────────────

    #[error("No data store configured")]
    #[diagnostic(
        code(adlens::no_config),
        help(
            "Create a config with: adlens config init\n\
             Or pass --store-url / --api-key, or use --mock for sample data.\n\
             Config file location: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("No API key configured for profile '{profile}'")]
    #[diagnostic(
        code(adlens::no_credentials),
        help("Set the ADLENS_API_KEY environment variable or add api_key to the profile.")
    )]
    NoCredentials { profile: String },

    // ── Data store ───────────────────────────────────────────────────

    #[error("Could not reach the data store")]
    #[diagnostic(
        code(adlens::connection_failed),
        help(
            "Check that the store URL is correct and reachable.\n\
             Use --mock to work against the built-in sample data."
        )
    )]
    ConnectionFailed { reason: String },

    #[error("Data store authentication failed")]
    #[diagnostic(
        code(adlens::auth_failed),
        help("Verify the API key for this profile (service keys expire when rotated).")
    )]
    AuthFailed { message: String },

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(adlens::not_found), help("List ids with: adlens {list_command}"))]
    NotFound {
        resource_type: &'static str,
        identifier: String,
        list_command: &'static str,
    },

    // ── Pass-through ─────────────────────────────────────────────────

    #[error("{0}")]
    #[diagnostic(code(adlens::core))]
    Core(CoreError),

    #[error("{0}")]
    #[diagnostic(code(adlens::config))]
    Config(ConfigError),

    #[error("IO error: {0}")]
    #[diagnostic(code(adlens::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Stable process exit code for scripting.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } | Self::InvalidRange { .. } => exit_code::USAGE,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::AuthenticationFailed { message } => Self::AuthFailed { message },
            CoreError::Store { status: None, message } => Self::ConnectionFailed { reason: message },
            CoreError::Store {
                status: Some(401 | 403),
                message,
            } => Self::AuthFailed { message },
            CoreError::ValidationFailed { field, reason } => Self::Validation { field, reason },
            other => Self::Core(other),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(other),
        }
    }
}
