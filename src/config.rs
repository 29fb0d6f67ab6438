//! Configuration for the client and server binaries
//!
//! Loaded from a YAML file. Every field has a default, and a missing file
//! is not an error; a malformed file is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub gamepad: GamepadConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Fixed input update rate, decoupled from the render frame rate
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

/// Overlay geometry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OverlayConfig {
    #[serde(default = "default_button_radius")]
    pub button_radius: f32,
    /// Layout bounds are inset by `button_radius * bounds_radius_scale`
    #[serde(default = "default_bounds_radius_scale")]
    pub bounds_radius_scale: f32,
}

/// Gamepad input switch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GamepadConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// HTTP server bind address.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

impl AppConfig {
    /// Load from a YAML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                info!("config {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn default_tick_hz() -> u32 {
    60
}

fn default_button_radius() -> f32 {
    92.0
}

fn default_bounds_radius_scale() -> f32 {
    1.25
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayConfig::default(),
            gamepad: GamepadConfig::default(),
            server: ServerConfig::default(),
            tick_hz: default_tick_hz(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            button_radius: default_button_radius(),
            bounds_radius_scale: default_bounds_radius_scale(),
        }
    }
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
