use std::sync::Arc;

use async_trait::async_trait;

use serenity::{
    model::{channel::Message, gateway::Ready},
    prelude::{Client, Context, EventHandler, GatewayIntents},
};

use dcb_core::{commands::CommandRouter, config::Config};

use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub router: Arc<CommandRouter>,
}

struct Handler {
    state: Arc<AppState>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        println!("Logged in as {}", ready.user.tag());
        tracing::info!(
            guilds = ready.guilds.len(),
            prefix = %self.state.router.prefix(),
            ignore_bots = self.state.cfg.ignore_bot_messages,
            "gateway ready"
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        handlers::handle_message(&ctx, &msg, &self.state).await;
    }
}

/// Open the gateway connection and serve commands until the client stops.
///
/// The router must already be validated; nothing here can fail on the table.
pub async fn run_gateway(cfg: Arc<Config>, router: Arc<CommandRouter>) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        router,
    });

    let mut client = Client::builder(&cfg.discord_bot_token, GatewayIntents::all())
        .event_handler(Handler { state })
        .await?;

    client.start().await?;
    Ok(())
}
