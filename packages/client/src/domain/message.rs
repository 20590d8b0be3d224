//! Outgoing chat message entity.

use super::{AccountId, MessageBody, MessageId};

/// A single message about to be sent, with its client-generated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub author: AccountId,
    pub recipient: AccountId,
    pub body: MessageBody,
    /// Client clock at creation (Unix milliseconds)
    pub timestamp: i64,
    /// Random 32-bit value mixed into `message_id`
    pub nonce: u32,
    pub message_id: MessageId,
}

impl OutgoingMessage {
    pub fn new(
        author: AccountId,
        recipient: AccountId,
        body: MessageBody,
        timestamp: i64,
        nonce: u32,
    ) -> Self {
        Self {
            author,
            recipient,
            body,
            timestamp,
            nonce,
            message_id: MessageId::generate(timestamp, nonce),
        }
    }
}
