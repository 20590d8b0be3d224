//! Interactive command-line client.

mod command;
mod dispatcher;
mod error;
mod formatter;
mod prompt;
mod runner;

pub use command::{COMMANDS, Command, CommandSpec};
pub use dispatcher::{Dispatcher, Flow};
pub use error::{ClientError, CommandError};
pub use formatter::{NOT_LOGGED_IN, ReplyFormatter};
pub use prompt::{CredentialPrompt, TerminalPrompt};
pub use runner::run_client;
