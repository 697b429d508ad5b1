//! Host error type.

use thiserror::Error;

use shatter_core::config::ConfigError;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("bad json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid tick count {0:?}")]
    InvalidTicks(String),
    #[error("simulation lock poisoned")]
    Poisoned,
    #[error("game loop is not running")]
    Disconnected,
    #[error("no new tick within {0:?}")]
    Stalled(std::time::Duration),
}
