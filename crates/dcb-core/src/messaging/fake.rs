//! In-memory messenger for dispatch tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    domain::{ChannelId, MessageId, MessageRef, UserId},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{Author, IncomingMessage},
    },
    Result,
};

pub const TEST_CHANNEL: ChannelId = ChannelId(555);
pub const TEST_MESSAGE: MessageId = MessageId(9000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sent {
    Send { channel_id: ChannelId, text: String },
    Reply { to: MessageRef, text: String },
}

#[derive(Default)]
pub struct FakeMessenger {
    fail: bool,
    next_id: Mutex<u64>,
    sent: Mutex<Vec<Sent>>,
}

impl FakeMessenger {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, channel_id: ChannelId, sent: Sent) -> Result<MessageRef> {
        if self.fail {
            return Err(Error::External("missing permissions".to_string()));
        }
        self.sent.lock().unwrap().push(sent);
        let mut guard = self.next_id.lock().unwrap();
        let id = *guard;
        *guard += 1;
        Ok(MessageRef {
            channel_id,
            message_id: MessageId(id),
        })
    }
}

#[async_trait]
impl MessagingPort for FakeMessenger {
    async fn send(&self, channel_id: ChannelId, text: &str) -> Result<MessageRef> {
        self.record(
            channel_id,
            Sent::Send {
                channel_id,
                text: text.to_string(),
            },
        )
    }

    async fn reply(&self, to: MessageRef, text: &str) -> Result<MessageRef> {
        self.record(
            to.channel_id,
            Sent::Reply {
                to,
                text: text.to_string(),
            },
        )
    }
}

pub fn author(id: u64, name: &str) -> Author {
    Author {
        id: UserId(id),
        name: name.to_string(),
        avatar_url: Some(format!("https://cdn.discordapp.com/avatars/{id}/a1b2c3.webp")),
        default_avatar_url: "https://cdn.discordapp.com/embed/avatars/1.png".to_string(),
        bot: false,
    }
}

/// A message from user `user_id` ("ada") in the test channel.
pub fn incoming(user_id: u64, content: &str) -> IncomingMessage {
    IncomingMessage {
        author: author(user_id, "ada"),
        channel_id: TEST_CHANNEL,
        message_id: TEST_MESSAGE,
        content: content.to_string(),
    }
}
