//! Data Transfer Objects for the site's requests and responses.
//!
//! - `form`: query strings and form bodies per endpoint
//! - `presence`: buddy list entries

pub mod form;
pub mod presence;

pub use form::FormFields;
pub use presence::BuddyPresenceDto;
