//! Interactive credential prompts.

use dialoguer::{Input, Password};

use super::error::ClientError;

/// Source of credentials missing from the `login` command line
pub trait CredentialPrompt {
    fn ask_email(&mut self) -> Result<String, ClientError>;

    /// Read the password without echoing it
    fn ask_password(&mut self) -> Result<String, ClientError>;
}

/// Terminal prompts backed by dialoguer
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl CredentialPrompt for TerminalPrompt {
    fn ask_email(&mut self) -> Result<String, ClientError> {
        let email: String = Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| ClientError::Prompt(e.to_string()))?;
        Ok(email.trim().to_string())
    }

    fn ask_password(&mut self) -> Result<String, ClientError> {
        Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| ClientError::Prompt(e.to_string()))
    }
}
