//! Buddy list entry DTO.

use serde::Deserialize;
use serde_json::Value;

/// One `nowAvailableList` entry; only the presence status is read
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BuddyPresenceDto {
    #[serde(default)]
    pub p: Option<PresenceDto>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PresenceDto {
    pub status: String,
}

impl BuddyPresenceDto {
    /// Read an entry leniently; unknown shapes yield no status
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    pub fn status(&self) -> Option<&str> {
        self.p.as_ref().map(|p| p.status.as_str())
    }
}
