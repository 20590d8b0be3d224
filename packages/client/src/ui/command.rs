//! Command table and line parser.

use crate::domain::{AccountId, MessageBody};

use super::error::CommandError;

/// One entry of the static command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// All commands understood by the dispatcher
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "login",
        usage: "login [email [password]]",
        description: "Log in; missing credentials are prompted for",
    },
    CommandSpec {
        name: "online",
        usage: "online",
        description: "List contacts that are online now",
    },
    CommandSpec {
        name: "typing",
        usage: "typing <id>",
        description: "Show the typing indicator to a contact",
    },
    CommandSpec {
        name: "stoptyping",
        usage: "stoptyping <id>",
        description: "Clear the typing indicator for a contact",
    },
    CommandSpec {
        name: "send",
        usage: "send <id> <text>",
        description: "Send a message to a contact",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Show this list",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        description: "Quit (also 'quit')",
    },
];

/// Look up a command's table entry by name
pub fn command_spec(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    ListOnline,
    Typing {
        target: AccountId,
        typing: bool,
    },
    Send {
        target: AccountId,
        body: MessageBody,
    },
    Help,
    Exit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let (name, rest) = split_first_word(line);

        let command = match name {
            "" => return Ok(None),
            "login" => {
                let (email, password) = split_first_word(rest);
                Command::Login {
                    email: non_empty(email),
                    password: non_empty(password.trim_end()),
                }
            }
            "online" => Command::ListOnline,
            "typing" => Command::Typing {
                target: parse_target("typing", rest)?,
                typing: true,
            },
            "stoptyping" => Command::Typing {
                target: parse_target("stoptyping", rest)?,
                typing: false,
            },
            "send" => {
                let (target, text) = split_first_word(rest);
                let target = parse_target("send", target)?;
                let body = MessageBody::new(text.to_string()).map_err(|_| {
                    CommandError::MissingArgument {
                        command: "send",
                        argument: "message text",
                    }
                })?;
                Command::Send { target, body }
            }
            "help" => Command::Help,
            "exit" | "quit" => Command::Exit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Split at the first whitespace run: `("send", "42 hi there")`.
fn split_first_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(index) => (&input[..index], input[index..].trim_start()),
        None => (input, ""),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn parse_target(command: &'static str, raw: &str) -> Result<AccountId, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "contact id",
        });
    }
    Ok(AccountId::parse(raw)?)
}
