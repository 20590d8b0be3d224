//! Paths of the site's private endpoints, relative to the site root.
//!
//! These are owned by the site and change without notice; keep every path in
//! this table so a markup/protocol drift is fixed in one place.

/// Site root (token scrape and tracking cookie)
pub const HOME: &str = "";
/// Login form target
pub const LOGIN: &str = "login.php";
/// Buddy list AJAX call
pub const BUDDY_LIST: &str = "ajax/chat/buddy_list.php";
/// Typing indicator AJAX call
pub const TYPING: &str = "ajax/messaging/typ.php";
/// Message batch AJAX call
pub const SEND_MESSAGES: &str = "ajax/mercury/send_messages.php";
