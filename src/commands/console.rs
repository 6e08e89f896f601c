//! Interactive console command.

use clap::Args;

use super::Context;
use crate::shell::Shell;
use remit_core::error::AppError;

/// Arguments for the console command
#[derive(Debug, Args)]
pub struct ConsoleArgs {
    /// Path to open first
    #[arg(short, long, default_value = "/transactions")]
    pub path: String,
}

/// Execute the console command
pub async fn execute(args: &ConsoleArgs, ctx: Context) -> Result<(), AppError> {
    Shell::new(ctx).run(&args.path).await
}
