//! Discord event handlers.
//!
//! Each gateway message is converted into the core model and handed to the
//! command router; the reply goes out through [`DiscordMessenger`].

use serenity::{model::channel::Message, prelude::Context};

use dcb_core::commands::Dispatch;

use crate::router::AppState;
use crate::DiscordMessenger;

pub async fn handle_message(ctx: &Context, msg: &Message, state: &AppState) {
    let messenger = DiscordMessenger::new(ctx.http.clone());

    match state
        .router
        .dispatch(&messenger, DiscordMessenger::incoming(msg))
        .await
    {
        Ok(Dispatch::Handled {
            command,
            delivery,
            sent,
        }) => {
            tracing::debug!(
                command,
                ?delivery,
                message_id = sent.message_id.0,
                "reply delivered"
            );
        }
        Ok(Dispatch::Unknown(_)) | Ok(Dispatch::Ignored) => {}
        Err(e) => {
            // Nothing to retry; the user just sees no reply.
            tracing::error!(
                channel_id = msg.channel_id.get(),
                error = %e,
                "command reply failed"
            );
        }
    }
}
