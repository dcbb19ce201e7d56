mod model;
mod server;

use chrono::Utc;
use dioxus_logger::tracing::{self, Level};

use crate::server::{
    bot, config::Config, error::AppError, router, service::bot_status::BotStatusRegistry,
    startup, state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run().await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let started_at = Utc::now();
    let config = Config::from_env()?;

    let registry = startup::build_registry();
    let statuses = BotStatusRegistry::new();

    tracing::info!("Starting {} bot(s)", config.bots.len());

    for bot_config in &config.bots {
        let name = bot_config.profile.name.clone();
        statuses.register(&name).await;

        let client = bot::start::init_bot(bot_config, registry.clone(), statuses.clone()).await?;

        // Each bot runs in its own task so one failing bot does not stop the others
        let bot_statuses = statuses.clone();
        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(name.clone(), client, bot_statuses.clone()).await {
                tracing::error!("{} stopped: {}", name, e);
                bot_statuses.set_online(&name, false).await;
            }
        });
    }

    let bot_names = config
        .bots
        .iter()
        .map(|bot| bot.profile.name.clone())
        .collect();
    let app = router::router().with_state(AppState::new(statuses, started_at, bot_names));

    let listener = startup::bind_listener(&config).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");

    Ok(())
}
