//! faultline daemon
//!
//! Serves the versioned failure-translation endpoints over HTTP

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use color_eyre::Result;
use faultline::{AppState, Config, create_router, telemetry};
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "Failure translation demo daemon", long_about = None)]
struct Args {
    /// Config file (defaults to $FAULTLINE_CONFIG or the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let (mut config, source) = Config::load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.daemon.bind = bind;
    }

    telemetry::init(&config.daemon)?;
    match &source {
        Some(path) => tracing::info!(path = %path.display(), "loaded configuration"),
        None => tracing::warn!("no config file found, using defaults"),
    }

    let bind = config.daemon.bind.clone();
    let state = Arc::new(AppState::new(config)?);
    let app = create_router(state);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "faultline daemon listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("faultline daemon stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
