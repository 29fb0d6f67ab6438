//! vpad - client/server sample with a virtual game controller overlay
//!
//! The client renders a line of shared text plus an on-screen virtual
//! controller (stick + button) that unifies touch, gamepad, and keyboard
//! input into one polled button/axis model with edge-triggered change
//! events. The server exposes one HTTP route returning a greeting built
//! from the same shared constant.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod app;
pub mod config;
pub mod controller;
pub mod input;
pub mod overlay;
pub mod server;
pub mod shared;

/// Initialize tracing for a binary. `RUST_LOG` wins over the given level.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
