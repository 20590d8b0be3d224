//! Utilities shared by the buddyline crates: logging, clock and nonce sources.

pub mod logger;
pub mod nonce;
pub mod time;
