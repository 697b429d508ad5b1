//! Loading `SimConfig` from JSON.

use std::fs;
use std::path::Path;

use shatter_core::config::SimConfig;

use crate::error::HostError;

/// Read and validate a config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<SimConfig, HostError> {
    let raw = fs::read_to_string(path)?;
    let config = parse_config(&raw)?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(raw: &str) -> Result<SimConfig, HostError> {
    let config: SimConfig = serde_json::from_str(raw)?;
    config.validate()?;
    Ok(config)
}
