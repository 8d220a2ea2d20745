//! Config command handlers.

use adlens_config::{Config, config_path, load_config_or_default, save_config, starter_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let config = redact(load_config_or_default());
            let rendered = toml::to_string_pretty(&config).map_err(|e| CliError::Validation {
                field: "config".into(),
                reason: e.to_string(),
            })?;
            output::print_output(rendered.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config_path();
            if path.exists() && !force {
                return Err(CliError::Validation {
                    field: "config".into(),
                    reason: format!(
                        "{} already exists — pass --force to overwrite",
                        path.display()
                    ),
                });
            }
            save_config(&starter_config(), &path)?;
            if !global.quiet {
                eprintln!("Wrote starter config to {}", path.display());
            }
            Ok(())
        }
    }
}

/// Mask any plaintext API keys before display.
fn redact(mut config: Config) -> Config {
    for profile in config.profiles.values_mut() {
        if profile.api_key.is_some() {
            profile.api_key = Some("***".into());
        }
    }
    config
}
