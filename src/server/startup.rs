use chrono::Utc;
use serenity::http::Http;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    data::{
        backend::{JsonFileBackend, PollBackend},
        document::DocumentRepository,
        poll::PollStore,
    },
    error::AppError,
    router,
    service::{
        access::AccessGate,
        broadcast::BroadcastService,
        fanout::FanoutBroadcaster,
        poll::PollEngine,
        role::RoleNameResolver,
        transport::DiscordHttp,
    },
    state::BotState,
};

/// Initializes the `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Loads documents and wires the services into the shared bot state.
///
/// Configuration documents degrade to empty when unreadable. The poll store is
/// opened and an eviction pass runs before the state is returned, so expired
/// polls are never addressable after a restart.
///
/// # Arguments
/// - `config` - Application configuration
/// - `http` - Discord HTTP client used for sends, edits and role lookups
///
/// # Returns
/// - `Ok(BotState)` - Ready-to-use state
/// - `Err(AppError)` - Startup eviction could not be persisted
pub async fn build_state(config: &Config, http: Arc<Http>) -> Result<BotState, AppError> {
    let documents = DocumentRepository::new(&config.users_file, &config.channels_file);
    let users = documents.load_allow_list().await;
    let channels = Arc::new(documents.load_channels().await);

    let gate = Arc::new(AccessGate::new(users, config.auth_exempt_commands.clone()));

    let discord = Arc::new(DiscordHttp::new(http));
    let broadcaster = FanoutBroadcaster::new(discord.clone(), config.send_delay);
    let roles = RoleNameResolver::new(discord);

    let backend = JsonFileBackend::new(&config.polls_file);
    tracing::info!("Using poll store {}", backend.path().display());
    let backend: Arc<dyn PollBackend> = Arc::new(backend);
    let store = Arc::new(PollStore::open(backend).await);

    let polls = Arc::new(PollEngine::new(store, broadcaster.clone(), roles.clone()));
    polls.evict_expired(Utc::now()).await?;
    tracing::info!("{} active poll(s) after startup eviction", polls.active_poll_count().await);

    let broadcasts = BroadcastService::new(channels.clone(), broadcaster, roles);

    Ok(BotState::new(gate, channels, broadcasts, polls))
}

/// Serves the liveness endpoint until the process exits.
///
/// # Arguments
/// - `port` - Port bound on all interfaces
///
/// # Returns
/// - `Err(AppError::IoErr)` - Failed to bind or serve
pub async fn serve_liveness(port: u16) -> Result<(), AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Liveness endpoint listening on port {}", port);

    axum::serve(listener, router::router()).await?;

    Ok(())
}
