//! Decoder for the sentinel-prefixed JSON envelope.
//!
//! Every JSON-bearing response from the chat endpoints starts with the
//! non-JSON prefix `for (;;);`. The prefix is mandatory: a body without it is
//! rejected rather than parsed, since it usually means an HTML error page.

use serde_json::Value;

use super::EnvelopeError;

/// Prefix prepended by the site to every JSON response
pub const SENTINEL: &str = "for (;;);";

/// Strip the sentinel and parse the remaining JSON.
pub fn decode_envelope(text: &str) -> Result<Value, EnvelopeError> {
    let json = text
        .strip_prefix(SENTINEL)
        .ok_or(EnvelopeError::MissingSentinel)?;

    serde_json::from_str(json).map_err(|e| EnvelopeError::InvalidJson(e.to_string()))
}
