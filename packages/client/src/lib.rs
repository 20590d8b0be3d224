//! Command-line client for a social network's web chat.
//!
//! Logs in through the site's login form, scrapes the anti-forgery token, and
//! exposes the buddy list, typing indicator, and message send calls through an
//! interactive command loop.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
