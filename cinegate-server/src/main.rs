//! # Cinegate Server
//!
//! Gateway over the TMDB metadata API with per-user watchlists.
//!
//! ## Overview
//!
//! The server exposes two surfaces:
//!
//! - **Catalog proxy**: trending/top-rated/popular/upcoming/search/detail
//!   endpoints that fetch from the upstream provider and normalize every
//!   record into one canonical item shape
//! - **Watchlist**: per-user saved titles with status/liked/rating fields,
//!   persisted in PostgreSQL
//!
//! ## Architecture
//!
//! Built on Axum; PostgreSQL (sqlx) for the watchlist, reqwest for the
//! upstream provider. Configuration comes entirely from the environment.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinegate_server::{routes, AppState, Config};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "cinegate-server")]
#[command(about = "TMDB metadata gateway with per-user watchlists")]
struct Cli {
    /// Bind address, overrides SERVER_HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides SERVER_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Override via RUST_LOG.
                    "info,tower_http=warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    if let Some(port) = cli.port {
        config.server_port = port;
    }

    let addr: SocketAddr =
        format!("{}:{}", config.server_host, config.server_port)
            .parse()
            .context("invalid server host/port")?;

    let state = AppState::from_config(config).await?;
    let router = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("cinegate listening on {addr}");

    axum::serve(listener, router).await?;
    Ok(())
}
