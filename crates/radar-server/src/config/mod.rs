//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use radar_core::error::{RadarError, Result};

pub use schema::{RadarConfig, ServerSection};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RADAR_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_PATH: &str = "radar.yaml";

/// Pick the config file to load, if any.
///
/// An explicit `RADAR_CONFIG` always wins (and must exist). Otherwise
/// `radar.yaml` is used when present; `None` means built-in defaults.
pub fn resolve_path() -> Option<String> {
    match std::env::var(CONFIG_ENV) {
        Ok(p) if !p.is_empty() => Some(p),
        _ if Path::new(DEFAULT_CONFIG_PATH).exists() => Some(DEFAULT_CONFIG_PATH.to_string()),
        _ => None,
    }
}

pub fn load_from_file(path: &str) -> Result<RadarConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RadarError::Config(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RadarConfig> {
    let cfg: RadarConfig = serde_yaml::from_str(s)
        .map_err(|e| RadarError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
