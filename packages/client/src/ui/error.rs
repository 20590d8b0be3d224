//! Error types for the interactive client.

use thiserror::Error;

use crate::{
    domain::{GatewayError, ValueObjectError},
    usecase::{LoginError, RequestError},
};

/// Fatal client errors; any of these ends the command loop
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("login failed: {0}")]
    Login(#[from] LoginError),

    #[error("request failed: {0}")]
    Request(#[from] RequestError),

    #[error("gateway setup failed: {0}")]
    Gateway(#[from] GatewayError),

    /// Credential prompt could not read from the terminal
    #[error("prompt error: {0}")]
    Prompt(String),

    /// Line editor failure other than Ctrl-C / Ctrl-D
    #[error("readline error: {0}")]
    Readline(String),
}

/// Malformed command line; reported to the user and the loop continues
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid contact id: {0}")]
    InvalidTarget(#[from] ValueObjectError),
}
