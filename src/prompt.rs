//! Interactive credential prompts.

use dialoguer::{Input, Password};

use remit_core::error::AppError;

/// Ask for the login credential (email or phone).
pub fn credential() -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt("Email or phone")
        .allow_empty(true)
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

/// Ask for the password without echoing it.
pub fn password() -> Result<String, AppError> {
    Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

/// Ask a yes/no question.
pub fn confirm(question: &str) -> Result<bool, AppError> {
    dialoguer::Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}
