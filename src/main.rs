use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use search_relay::api::{AppState, create_router};
use search_relay::config::Config;
use search_relay::fetcher::HttpFetcher;

/// Relays search and article requests to the web and answers with JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Address to bind, overrides RELAY_HOST
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides RELAY_PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (handles both tracing and log crate)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let fetcher = HttpFetcher::from_config(&config).context("failed to build HTTP client")?;
    let addr = config.bind_addr();
    let app = create_router(AppState::new(config, Arc::new(fetcher)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("relay server running on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
