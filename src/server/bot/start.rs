use dioxus_logger::tracing;
use serenity::all::{ApplicationId, Client, GatewayIntents, ShardManager};
use std::sync::Arc;
use std::time::Duration;

use crate::server::{
    config::BotConfig,
    error::AppError,
    service::{
        bot_status::BotStatusRegistry,
        command::{cooldown::CooldownTracker, dispatcher::Dispatcher, registry::CommandRegistry},
    },
};

use super::handler::Handler;

/// Interval between copies of the shard heartbeat latency into the bot status.
const LATENCY_PROBE_INTERVAL: Duration = Duration::from_secs(30);

/// Builds the Discord client of one bot.
///
/// Every bot gets its own dispatcher and cooldown tracker; the command registry is
/// shared between all of them.
///
/// # Arguments
/// - `config` - Profile and credentials of the bot
/// - `registry` - Command registry shared by all bots
/// - `statuses` - Status registry updated by the bot's event handler
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - The client could not be built
pub async fn init_bot(
    config: &BotConfig,
    registry: Arc<CommandRegistry>,
    statuses: BotStatusRegistry,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - must be enabled in
    // the Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let profile = Arc::new(config.profile.clone());
    let dispatcher = Dispatcher::new(profile, registry, CooldownTracker::new());
    let handler = Handler::new(config.profile.name.clone(), Arc::new(dispatcher), statuses);

    tracing::debug!(
        "Initializing {} as application {}",
        config.profile.name,
        config.client_id
    );

    let client = Client::builder(&config.token, intents)
        .application_id(ApplicationId::new(config.client_id))
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Should be called from within a tokio::spawn task since it only returns once the
/// bot shuts down. Also spawns the latency probe of the bot.
///
/// # Arguments
/// - `name` - Display name of the bot
/// - `client` - Client built by `init_bot`
/// - `statuses` - Status registry the latency probe writes to
///
/// # Returns
/// - `Ok(())` - The bot shut down
/// - `Err(AppError)` - The gateway connection failed
pub async fn start_bot(
    name: String,
    mut client: Client,
    statuses: BotStatusRegistry,
) -> Result<(), AppError> {
    tokio::spawn(probe_latency(
        name.clone(),
        client.shard_manager.clone(),
        statuses,
    ));

    tracing::info!("Starting {}...", name);

    client.start().await?;

    Ok(())
}

/// Periodically copies the heartbeat latency of the bot's shard into its status.
async fn probe_latency(name: String, shard_manager: Arc<ShardManager>, statuses: BotStatusRegistry) {
    let mut interval = tokio::time::interval(LATENCY_PROBE_INTERVAL);

    loop {
        interval.tick().await;

        let latency = {
            let runners = shard_manager.runners.lock().await;
            runners.values().find_map(|runner| runner.latency)
        };

        tracing::trace!("{} gateway latency: {:?}", name, latency);
        statuses.set_latency(&name, latency).await;
    }
}
