//! vpad client - window with the shared text and the controller overlay

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use tracing::info;

use vpad::config::AppConfig;

/// VPad client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    vpad::init_logging(&args.log_level)?;

    info!("Starting vpad client...");
    info!("Configuration file: {}", args.config);

    let config = AppConfig::load(Path::new(&args.config))?;
    vpad::app::run(config)
}
