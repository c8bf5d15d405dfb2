//! Ladle color server binary.

use std::process::ExitCode;

use clap::Parser;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ladle_colors::server::run_with_shutdown;
use ladle_colors::ServerConfig;

/// Color conversion and palette API server
#[derive(Parser)]
#[command(name = "ladle-server")]
#[command(version)]
struct Args {
    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<String>,

    /// Listen address, overrides the config file and LADLE_LISTEN_ADDR
    #[arg(short, long)]
    listen: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long)]
    json_logs: bool,

    /// Write the effective configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    dump_config: Option<String>,
}

fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(&args.log_level, args.json_logs);

    let loaded = match &args.config {
        Some(path) => ServerConfig::load(path),
        None => ServerConfig::from_env(),
    };
    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    if let Some(path) = &args.dump_config {
        if let Err(e) = config.to_json_file(path) {
            error!("Failed to write configuration: {:#}", e);
            return ExitCode::FAILURE;
        }
        info!("Wrote configuration to {}", path);
        return ExitCode::SUCCESS;
    }

    info!("Starting ladle server on {}", config.listen_addr);

    if let Err(e) = run_with_shutdown(config, shutdown_signal()).await {
        error!("Server error: {:#}", e);
        return ExitCode::FAILURE;
    }

    info!("Server stopped");
    ExitCode::SUCCESS
}
