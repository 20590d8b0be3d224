//! UseCase layer: one use case per chat operation.

mod error;
mod list_online;
mod login;
mod response;
mod send_message;
mod set_typing;

pub use error::{LoginError, RequestError};
pub use list_online::{ListOnlineUseCase, OnlineBuddies};
pub use login::{LoginOutcome, LoginUseCase};
pub use send_message::{SendMessageUseCase, SendReceipt};
pub use set_typing::SetTypingUseCase;
