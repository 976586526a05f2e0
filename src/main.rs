mod server;

use serenity::http::Http;
use std::sync::Arc;

use crate::server::{bot, config::Config, error::AppError, scheduler::poll_eviction, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging();

    let config = Config::from_env()?;

    let http = Arc::new(Http::new(&config.discord_bot_token));
    let state = startup::build_state(&config, http).await?;

    let _scheduler = poll_eviction::start_scheduler(state.polls.clone()).await?;

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_liveness(port).await {
            tracing::error!("Liveness endpoint error: {}", e);
        }
    });

    tracing::info!("Starting bot");

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
