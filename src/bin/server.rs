//! vpad server - serves the greeting built from the shared constant

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

use vpad::config::AppConfig;

/// VPad server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Override the configured bind host
    #[arg(long, env = "VPAD_HOST")]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(short, long, env = "VPAD_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    vpad::init_logging(&args.log_level)?;

    info!("Starting vpad server...");

    let mut config = AppConfig::load(Path::new(&args.config))?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    vpad::server::serve(&config.server.bind_addr()).await?;

    info!("vpad server shutdown complete");
    Ok(())
}
