//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use remit_core::config::AppConfig;
use remit_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration and print a summary
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_value(&serde_json::to_value(config)?, format);
        }
        ConfigCommand::Validate => {
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("API", &config.api.base_url);
            output::print_kv("Realtime", &config.realtime.url);
            output::print_kv(
                "Toast auto-hide",
                &format!("{}s", config.realtime.notifications.auto_hide_seconds),
            );
            let reconnect = &config.realtime.reconnect;
            let policy = if reconnect.max_attempts == 0 {
                "disabled".to_string()
            } else {
                format!(
                    "{} attempts, {}-{} ms",
                    reconnect.max_attempts, reconnect.initial_backoff_ms, reconnect.max_backoff_ms
                )
            };
            output::print_kv("Reconnect", &policy);
            output::print_kv("Session file", &config.session.storage_path);
            output::print_kv("Login route", &config.session.login_path);
        }
    }
    Ok(())
}
