//! Configuration errors
//!
//! Everything that consumes static configuration validates it up front and
//! reports problems here instead of failing mid-game.

use std::path::PathBuf;

use thiserror::Error;

/// Rejected or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas dimensions must be positive and finite, got {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("{name} must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be positive and finite, got {value}")]
    InvalidInterval { name: &'static str, value: f32 },

    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },

    #[error("{name} must be within 0.0..=1.0, got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },

    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
