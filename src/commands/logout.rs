//! Logout command.

use super::Context;
use crate::output;
use remit_core::error::AppError;

/// Execute the logout command
pub async fn execute(ctx: &Context) -> Result<(), AppError> {
    ctx.sessions.logout().await?;
    output::print_success("Logged out");
    Ok(())
}
