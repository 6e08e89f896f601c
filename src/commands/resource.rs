//! Generic back-office resource commands.

use clap::{Args, Subcommand};
use serde_json::Value;

use super::Context;
use crate::output::{self, OutputFormat};
use crate::prompt;
use remit_api::ResourceKind;
use remit_core::error::AppError;

/// Arguments for resource commands
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// Resource name: transactions, countries, currencies, exchange-rates,
    /// rates, fees, payment-methods, receiving-methods, users
    pub name: ResourceKind,

    /// Resource subcommand
    #[command(subcommand)]
    pub command: ResourceCommand,
}

/// Resource subcommands
#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    /// List records
    List,
    /// Create a record
    Create {
        /// JSON payload
        #[arg(short, long)]
        data: String,
    },
    /// Update a record
    Update {
        /// Record ID
        id: String,
        /// JSON payload
        #[arg(short, long)]
        data: String,
    },
    /// Delete a record
    Delete {
        /// Record ID
        id: String,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Execute resource commands
pub async fn execute(
    args: &ResourceArgs,
    ctx: &Context,
    format: OutputFormat,
) -> Result<(), AppError> {
    let kind = args.name;

    match &args.command {
        ResourceCommand::List => {
            let session = if kind.list_requires_auth() {
                Some(ctx.require_session().await?)
            } else {
                None
            };
            let records = ctx.api.list(kind, session.as_ref()).await?;
            output::print_records(&records, format);
        }
        ResourceCommand::Create { data } => {
            let session = ctx.require_session().await?;
            let created = ctx.api.create(kind, &parse_payload(data)?, &session).await?;
            output::print_success(&format!("Created {} record", kind));
            output::print_value(&created, format);
        }
        ResourceCommand::Update { id, data } => {
            let session = ctx.require_session().await?;
            let updated = ctx
                .api
                .update(kind, id, &parse_payload(data)?, &session)
                .await?;
            output::print_success(&format!("Updated {} record {}", kind, id));
            output::print_value(&updated, format);
        }
        ResourceCommand::Delete { id, force } => {
            let session = ctx.require_session().await?;
            if !force && !prompt::confirm(&format!("Delete {} record {}?", kind, id))? {
                output::print_warning("Cancelled");
                return Ok(());
            }
            ctx.api.delete(kind, id, &session).await?;
            output::print_success(&format!("Deleted {} record {}", kind, id));
        }
    }

    Ok(())
}

/// Parse a `--data` argument. Payloads must be JSON objects.
fn parse_payload(data: &str) -> Result<Value, AppError> {
    let value: Value = serde_json::from_str(data)
        .map_err(|e| AppError::validation(format!("--data is not valid JSON: {}", e)))?;
    if !value.is_object() {
        return Err(AppError::validation("--data must be a JSON object"));
    }
    Ok(value)
}
