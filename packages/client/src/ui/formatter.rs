//! Reply formatting utilities for terminal display.

use buddyline_shared::time::timestamp_to_rfc3339;
use serde_json::Value;

use crate::{
    domain::Session,
    infrastructure::dto::BuddyPresenceDto,
    usecase::{LoginOutcome, OnlineBuddies, SendReceipt},
};

use super::{
    command::{COMMANDS, command_spec},
    error::CommandError,
};

/// Notice printed when an authenticated command is used before logging in
pub const NOT_LOGGED_IN: &str = "Not logged in. Use 'login' first.";

/// Reply formatter for the interactive client
pub struct ReplyFormatter;

impl ReplyFormatter {
    /// Line editor prompt: `1001> ` once logged in, `> ` before
    pub fn format_prompt(session: &Session) -> String {
        match session.account_id() {
            Some(account_id) => format!("{}> ", account_id),
            None => "> ".to_string(),
        }
    }

    pub fn format_not_logged_in() -> String {
        NOT_LOGGED_IN.to_string()
    }

    /// Format the command table
    pub fn format_help() -> String {
        let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
        COMMANDS
            .iter()
            .map(|c| format!("  {:<width$}  {}", c.usage, c.description, width = width))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format a malformed command line with the command's usage when known
    pub fn format_command_error(error: &CommandError) -> String {
        match error {
            CommandError::Unknown(_) => {
                format!("{}. Type 'help' for a list of commands.", error)
            }
            CommandError::MissingArgument { command, .. } => match command_spec(command) {
                Some(spec) => format!("{}. Usage: {}", error, spec.usage),
                None => error.to_string(),
            },
            CommandError::InvalidTarget(_) => error.to_string(),
        }
    }

    pub fn format_login_outcome(outcome: &LoginOutcome) -> String {
        match outcome {
            LoginOutcome::LoggedIn(account_id) => format!("Logged in as {}", account_id),
            LoginOutcome::Rejected => "Incorrect email or password".to_string(),
        }
    }

    /// Format the buddy list as `User <id> is <status>` lines, sorted by id
    ///
    /// The status is read from the entry's `p.status`; entries without one are
    /// shown as `unknown`.
    pub fn format_online_buddies(buddies: &OnlineBuddies) -> String {
        if buddies.is_empty() {
            return "(Nobody is online)".to_string();
        }

        let mut entries: Vec<(&String, &Value)> = buddies.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        entries
            .into_iter()
            .map(|(id, info)| {
                let presence = BuddyPresenceDto::from_value(info);
                format!("User {} is {}", id, presence.status().unwrap_or("unknown"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pretty-print a JSON response
    pub fn format_json_response(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    }

    /// Format a send receipt followed by the site's response
    pub fn format_sent(receipt: &SendReceipt) -> String {
        format!(
            "sent {} at {}\n{}",
            receipt.message_id,
            timestamp_to_rfc3339(receipt.timestamp),
            Self::format_json_response(&receipt.response)
        )
    }
}
