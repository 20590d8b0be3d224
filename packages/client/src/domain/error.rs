//! Domain-level error types.

use thiserror::Error;

/// Value Object の生成エラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueObjectError {
    #[error("invalid account id '{0}'")]
    InvalidAccountId(String),

    #[error("session cookie is empty")]
    EmptySessionCookie,

    #[error("anti-forgery token is empty")]
    EmptyCsrfToken,

    #[error("message body is empty")]
    EmptyMessageBody,
}

/// Transport failure reported by an [`HttpGateway`](super::HttpGateway)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Setup(String),

    /// The request URL could not be built from the base URL and path
    #[error("invalid request url '{0}'")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, TLS, connection reset, ...)
    #[error("request to '{path}' failed: {reason}")]
    Transport { path: String, reason: String },

    /// The response body could not be read
    #[error("failed to read response body from '{path}': {reason}")]
    Body { path: String, reason: String },
}

/// Sentinel-prefixed JSON decoding failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("response is missing the 'for (;;);' prefix")]
    MissingSentinel,

    #[error("response payload is not valid JSON: {0}")]
    InvalidJson(String),
}

/// Anti-forgery token scrape failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The page no longer carries the token attribute (markup changed)
    #[error("anti-forgery token not found in page body")]
    NotFound,
}
