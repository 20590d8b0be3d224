//! Anti-forgery token extraction from page markup.

use std::sync::LazyLock;

use regex::Regex;

use super::{CsrfToken, TokenError};

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name="fb_dtsg" value="([^"]+)""#).expect("token pattern must compile")
});

/// Extract the anti-forgery token from an HTML page body.
///
/// Only the first occurrence is used. A missing attribute means the site
/// markup changed and is reported as [`TokenError::NotFound`].
pub fn extract_csrf_token(page_body: &str) -> Result<CsrfToken, TokenError> {
    let captures = TOKEN_PATTERN
        .captures(page_body)
        .ok_or(TokenError::NotFound)?;

    let value = captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .ok_or(TokenError::NotFound)?;

    CsrfToken::new(value).map_err(|_| TokenError::NotFound)
}
