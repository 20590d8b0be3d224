//! Domain layer: session state, value objects and the gateway seam.

pub mod envelope;
pub mod error;
pub mod gateway;
pub mod message;
pub mod session;
pub mod token;
pub mod value_object;

pub use envelope::{SENTINEL, decode_envelope};
pub use error::{EnvelopeError, GatewayError, TokenError, ValueObjectError};
#[cfg(test)]
pub use gateway::MockChatGateway;
pub use gateway::{
    ACCOUNT_COOKIE, ChatGateway, HttpResponse, SESSION_COOKIE, STATUS_FOUND, STATUS_OK,
    TRACKING_COOKIE,
};
pub use message::OutgoingMessage;
pub use session::{Credentials, Session};
pub use token::extract_csrf_token;
pub use value_object::{AccountId, CsrfToken, MessageBody, MessageId, SessionCookie};
