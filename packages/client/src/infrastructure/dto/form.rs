//! Form and query encodings for each endpoint.
//!
//! Pure functions from domain values to ordered `(name, value)` pairs.

use crate::domain::{
    ACCOUNT_COOKIE, AccountId, Credentials, OutgoingMessage, SESSION_COOKIE, SessionCookie,
};

/// Ordered form or query pairs
pub type FormFields = Vec<(String, String)>;

/// Name of the anti-forgery form field
pub const TOKEN_FIELD: &str = "fb_dtsg";

fn pair(name: &str, value: impl Into<String>) -> (String, String) {
    (name.to_string(), value.into())
}

/// Authentication cookies for a logged-in account
pub fn auth_cookies(account_id: AccountId, session_cookie: &SessionCookie) -> FormFields {
    vec![
        pair(ACCOUNT_COOKIE, account_id.to_string()),
        pair(SESSION_COOKIE, session_cookie.as_str()),
    ]
}

/// Render cookie pairs as a `Cookie` header value
pub fn cookie_header(cookies: &[(String, String)]) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Login form body
pub fn login_form(email: &str, password: &str) -> FormFields {
    vec![pair("email", email), pair("pass", password)]
}

/// Buddy list query string
pub fn buddy_list_query(account_id: AccountId) -> FormFields {
    vec![pair("__a", "1"), pair("user", account_id.to_string())]
}

/// Typing indicator form body; `thread` equals `to` for one-to-one chats
pub fn typing_form(credentials: &Credentials, target: AccountId, typing: bool) -> FormFields {
    vec![
        pair("typ", if typing { "true" } else { "false" }),
        pair("to", target.to_string()),
        pair("source", "mercury-chat"),
        pair("thread", target.to_string()),
        pair("__user", credentials.account_id.to_string()),
        pair("__a", "1"),
        pair(TOKEN_FIELD, credentials.csrf_token.as_str()),
    ]
}

/// Single-element message batch form body
pub fn message_batch_form(credentials: &Credentials, message: &OutgoingMessage) -> FormFields {
    let author = format!("fbid:{}", message.author);
    let recipient = format!("fbid:{}", message.recipient);
    let field = |name: &str, value: String| (format!("message_batch[0][{}]", name), value);

    vec![
        pair("client", "mercury"),
        field("action_type", "ma-type:user-generated-message".to_string()),
        field("author", author.clone()),
        field("timestamp", message.timestamp.to_string()),
        field("timestamp_absolute", "Today".to_string()),
        field("source", "source:chat:web".to_string()),
        field("source_tags][0", "source:chat".to_string()),
        field("body", message.body.as_str().to_string()),
        field("has_attachment", "false".to_string()),
        field("html_body", "false".to_string()),
        field("status", "0".to_string()),
        field("message_id", message.message_id.as_str().to_string()),
        field("manual_retry_cnt", "0".to_string()),
        field("specific_to_list][0", recipient.clone()),
        field("specific_to_list][1", author),
        field("other_user_fbid", message.recipient.to_string()),
        pair("__user", credentials.account_id.to_string()),
        pair("__a", "1"),
        pair(TOKEN_FIELD, credentials.csrf_token.as_str()),
    ]
}
