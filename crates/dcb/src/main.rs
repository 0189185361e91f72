use std::sync::Arc;

use dcb_core::{
    commands::{builtin_commands, CommandRouter},
    config::Config,
};

#[tokio::main]
async fn main() -> Result<(), dcb_core::Error> {
    dcb_core::logging::init("dcb")?;

    let cfg = Arc::new(Config::load()?);

    // Validate the command table before opening the connection.
    let router = Arc::new(CommandRouter::from_config(&cfg, builtin_commands())?);
    tracing::info!(
        commands = router.commands().len(),
        prefix = %router.prefix(),
        "command table ready"
    );

    dcb_discord::router::run_gateway(cfg, router)
        .await
        .map_err(|e| dcb_core::Error::External(format!("discord bot failed: {e}")))?;

    Ok(())
}
