//! Discord adapter (serenity).
//!
//! This crate implements the `dcb-core` MessagingPort over the Discord HTTP API
//! and feeds gateway messages into the core command router.

use std::{num::NonZeroU64, sync::Arc};

use async_trait::async_trait;

use serenity::{
    builder::CreateMessage,
    http::Http,
    model::{channel::Message, user::User},
};

pub mod handlers;
pub mod router;

use dcb_core::{
    domain::{ChannelId, MessageId, MessageRef, UserId},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{Author, IncomingMessage},
    },
    Result,
};

#[derive(Clone)]
pub struct DiscordMessenger {
    http: Arc<Http>,
}

impl DiscordMessenger {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    fn dc_channel(channel_id: ChannelId) -> Result<serenity::model::id::ChannelId> {
        NonZeroU64::new(channel_id.0)
            .map(serenity::model::id::ChannelId::from)
            .ok_or_else(|| Error::External("discord channel id must be non-zero".to_string()))
    }

    fn dc_msg_id(message_id: MessageId) -> Result<serenity::model::id::MessageId> {
        NonZeroU64::new(message_id.0)
            .map(serenity::model::id::MessageId::from)
            .ok_or_else(|| Error::External("discord message id must be non-zero".to_string()))
    }

    fn map_err(e: serenity::Error) -> Error {
        Error::External(format!("discord error: {e}"))
    }

    fn message_ref(msg: &Message) -> MessageRef {
        MessageRef {
            channel_id: ChannelId(msg.channel_id.get()),
            message_id: MessageId(msg.id.get()),
        }
    }

    pub fn author(user: &User) -> Author {
        Author {
            id: UserId(user.id.get()),
            name: user.name.clone(),
            avatar_url: user.avatar_url(),
            default_avatar_url: user.default_avatar_url(),
            bot: user.bot,
        }
    }

    /// Convert a gateway message into the core's incoming message model.
    pub fn incoming(msg: &Message) -> IncomingMessage {
        IncomingMessage {
            author: Self::author(&msg.author),
            channel_id: ChannelId(msg.channel_id.get()),
            message_id: MessageId(msg.id.get()),
            content: msg.content.clone(),
        }
    }
}

#[async_trait]
impl MessagingPort for DiscordMessenger {
    async fn send(&self, channel_id: ChannelId, text: &str) -> Result<MessageRef> {
        let msg = Self::dc_channel(channel_id)?
            .say(&self.http, text)
            .await
            .map_err(Self::map_err)?;
        Ok(Self::message_ref(&msg))
    }

    async fn reply(&self, to: MessageRef, text: &str) -> Result<MessageRef> {
        let channel = Self::dc_channel(to.channel_id)?;
        let builder = CreateMessage::new()
            .content(text)
            .reference_message((channel, Self::dc_msg_id(to.message_id)?));
        let msg = channel
            .send_message(&self.http, builder)
            .await
            .map_err(Self::map_err)?;
        Ok(Self::message_ref(&msg))
    }
}
