use async_trait::async_trait;

use crate::{
    domain::{ChannelId, MessageRef},
    Result,
};

/// Cross-messenger port.
///
/// The two delivery operations an invocation can use. Implementations own
/// transport, retries and formatting limits.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Post `text` as a new message in `channel_id`.
    async fn send(&self, channel_id: ChannelId, text: &str) -> Result<MessageRef>;

    /// Post `text` as a message threaded to `to`.
    async fn reply(&self, to: MessageRef, text: &str) -> Result<MessageRef>;
}
