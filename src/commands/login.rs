//! Login command.

use clap::Args;

use super::Context;
use crate::{output, prompt};
use remit_core::error::AppError;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email or phone number (prompted if omitted)
    #[arg(short, long)]
    pub credential: Option<String>,

    /// Password (prompted if omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the login command
pub async fn execute(args: &LoginArgs, ctx: &Context) -> Result<(), AppError> {
    let credential = match &args.credential {
        Some(c) => c.clone(),
        None => prompt::credential()?,
    };
    if credential.is_empty() {
        return Err(AppError::validation("A credential is required"));
    }

    let password = match &args.password {
        Some(p) => p.clone(),
        None => prompt::password()?,
    };

    let session = ctx.sessions.login(&credential, &password).await?;
    let name = session.user.display_name().unwrap_or(&credential).to_string();
    output::print_success(&format!("Logged in as {}", name));
    Ok(())
}
