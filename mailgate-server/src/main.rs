//! mailgate - Headless Gateway
//!
//! A pure Rust HTTP server that:
//! - Forwards the read-only mail API routes on /api/public/v1/* to the upstream
//! - Serves a landing page or JSON documentation on /
//! - Exposes /health, /healthz and /version
//!
//! Access via: http://localhost:5000

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod cli;
mod commands;
mod config;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands, ConfigArgs};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = config::load_dotenv();
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;

    match dotenv {
        Ok(Some(path)) => info!("📄 Loaded environment from {}", path.display()),
        Ok(None) => {},
        Err(e) => tracing::warn!("⚠️ Ignoring unreadable .env file: {}", e),
    }

    match cli.command {
        None | Some(Commands::Serve) => run_server(&cli.config).await,
        Some(Commands::Routes { json }) => commands::handle_routes(json),
        Some(Commands::Check) => commands::handle_check(&cli.config),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

async fn run_server(args: &ConfigArgs) -> Result<()> {
    let config = args.to_gateway_config().context("Refusing to start")?;

    info!("🚀 mailgate v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("📮 Upstream: {}", config.upstream_base_url);
    info!("🔑 Credential policy: {}", config.credential_policy);
    info!("⏱️ Upstream timeout: {}s", config.request_timeout_secs);

    let listener = server_utils::create_listener(&config).await?;
    let local_addr = listener.local_addr()?;

    let state = AppState::new(config)?;
    let app = router::build_router(state);

    info!("🌐 Server listening on http://{}", local_addr);
    info!("🔀 Gateway endpoints at http://{}/api/public/v1/", local_addr);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
