use std::net::SocketAddr;

use serde::Deserialize;
use radar_core::error::{RadarError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadarConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl RadarConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RadarError::UnsupportedVersion);
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Upper bound for request bodies, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(1024..=10 * 1024 * 1024).contains(&self.max_body_bytes) {
            return Err(RadarError::Config(
                "server.max_body_bytes must be between 1024 and 10485760".into(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(RadarError::Config("server.log_filter must not be empty".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            RadarError::Config(format!("server.listen must be a valid socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_max_body_bytes() -> usize {
    64 * 1024
}
fn default_log_filter() -> String {
    "info".into()
}
