//! Entrypoint.

use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use config::Opts;
use dotenvy::dotenv;
use practicum::StatusClient;
use telegram::Notifier;
use tokio::signal::unix::{SignalKind, signal};
use tracing::{debug, error, info};
use tracing_subscriber::filter::EnvFilter;
use watcher::Watcher;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    if let Ok(custom_env_file) = std::env::var("ENV_FILE") {
        dotenvy::from_filename(custom_env_file)?;
    } else {
        // Try the default .env file, and ignore if it doesn't exist.
        dotenv().ok();
    }

    let opts = Opts::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = opts.check_tokens() {
        error!(%err, "refusing to start without required configuration");
        std::process::exit(1);
    }

    let practicum =
        StatusClient::new(opts.practicum.practicum_token.clone(), opts.practicum.endpoint.clone())?;
    let telegram =
        Notifier::new(opts.telegram.telegram_token.clone(), opts.telegram.chat_id.clone())?;
    let watch = Watcher::new(
        practicum,
        telegram,
        Duration::from_secs(opts.poll_interval_secs),
        Utc::now().timestamp() as u64,
    );

    info!(
        endpoint = %opts.practicum.endpoint,
        poll_interval_secs = opts.poll_interval_secs,
        "🔭 Reviewscope watcher starting..."
    );

    tokio::select! {
        result = watch.run() => result,
        () = shutdown_signal() => {
            info!("shutdown signal received, exiting");
            Ok(())
        }
    }
}

/// Resolve when either SIGINT or SIGTERM is delivered.
async fn shutdown_signal() {
    let mut term = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");

    tokio::select! {
        _ = tokio::signal::ctrl_c() => debug!("received SIGINT"),
        _ = term.recv() => debug!("received SIGTERM"),
    }
}
