use crate::domain::{ChannelId, MessageId, MessageRef, UserId};

/// The user who sent a message.
#[derive(Clone, Debug)]
pub struct Author {
    pub id: UserId,
    pub name: String,
    /// URL of the custom avatar, if the user uploaded one.
    pub avatar_url: Option<String>,
    /// URL of the platform-assigned default avatar.
    pub default_avatar_url: String,
    pub bot: bool,
}

impl Author {
    pub fn mention(&self) -> String {
        self.id.mention()
    }

    /// Custom avatar when present, otherwise the platform default.
    pub fn display_avatar_url(&self) -> &str {
        self.avatar_url
            .as_deref()
            .unwrap_or(&self.default_avatar_url)
    }
}

/// Cross-messenger incoming text message.
///
/// Discord-specific fields should live in the Discord adapter.
#[derive(Clone, Debug)]
pub struct IncomingMessage {
    pub author: Author,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub content: String,
}

impl IncomingMessage {
    pub fn message_ref(&self) -> MessageRef {
        MessageRef {
            channel_id: self.channel_id,
            message_id: self.message_id,
        }
    }
}

/// One command invocation: who ran it, where, and what they typed.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub author: Author,
    pub channel_id: ChannelId,
    pub message: MessageRef,
    /// Command token exactly as typed (a name or an alias).
    pub invoked_with: String,
    /// Everything after the token, trimmed.
    pub args: String,
}

/// How a reply is delivered back to the conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    /// New message in the originating channel.
    Send,
    /// Message threaded to the triggering message.
    Reply,
}

/// The single message a handler produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub delivery: Delivery,
    pub text: String,
}

impl Outgoing {
    pub fn send(text: impl Into<String>) -> Self {
        Self {
            delivery: Delivery::Send,
            text: text.into(),
        }
    }

    pub fn reply(text: impl Into<String>) -> Self {
        Self {
            delivery: Delivery::Reply,
            text: text.into(),
        }
    }
}
