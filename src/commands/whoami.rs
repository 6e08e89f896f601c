//! Show the stored session.

use super::Context;
use crate::output::{self, OutputFormat};
use remit_core::error::AppError;

/// Execute the whoami command
pub async fn execute(ctx: &Context, format: OutputFormat) -> Result<(), AppError> {
    let Some(session) = ctx.sessions.current().await else {
        output::print_warning("Not logged in");
        return Ok(());
    };

    match format {
        OutputFormat::Json => output::print_value(&serde_json::to_value(&session.user)?, format),
        OutputFormat::Table => {
            output::print_kv("Name", session.user.display_name().unwrap_or("-"));
            output::print_kv("Role", session.user.role.as_str());
            output::print_kv("Token", &mask(&session.token));
            output::print_kv("Stored in", &ctx.config.session.storage_path);
            if !session.is_admin() {
                output::print_warning("This session cannot open the console");
            }
        }
    }
    Ok(())
}

/// Keep the first characters of a token.
fn mask(token: &str) -> String {
    let visible: String = token.chars().take(8).collect();
    if visible.len() < token.len() {
        format!("{}…", visible)
    } else {
        visible
    }
}
