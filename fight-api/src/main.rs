//! Super Heroes Fight API Server Entry Point

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use superheroes_fight_api::cli::{Cli, Commands};
use superheroes_fight_api::config::ServerConfig;
use superheroes_fight_api::service::memory::InMemoryFightService;
use superheroes_fight_api::{api, logging, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init().context("failed to initialize logging")?;

    let config = match cli.command {
        Some(Commands::Serve(args)) => ServerConfig::from_args(args),
        None => ServerConfig::from_env(),
    };

    info!("Fight API v{}", env!("CARGO_PKG_VERSION"));
    run(config).await
}

async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let fight_service = match config.roster_path.as_deref() {
        Some(path) => {
            info!(path = %path, "Loading fighter roster");
            InMemoryFightService::from_roster_file(path)
                .with_context(|| format!("failed to load roster from {}", path))?
        }
        None => InMemoryFightService::default(),
    };
    info!("Fighter roster ready");

    let fight_service = Arc::new(fight_service);
    let state = AppState::new(fight_service).with_public_url(config.public_url.clone());

    let mut app = api::create_router(state);
    if let Some(cors) = config
        .cors_allowed_origins
        .as_deref()
        .and_then(api::cors_layer)
    {
        info!("CORS enabled");
        app = app.layer(cors);
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", bind_addr))?;

    info!("Fight API listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Fight API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
