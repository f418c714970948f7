use anyhow::{Context, Result};
use flare_tvl_core::models::settings::DashboardSettings;
use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Process configuration, read from the environment.
///
/// - `FLARE_TVL_SETTINGS`: optional path to a dashboard settings JSON file
/// - `FLARE_TVL_ADDR`: listen address, default `127.0.0.1:8000`
/// - `FLARE_TVL_LOG`: log level, default `info`
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub settings_path: Option<String>,
    pub addr: SocketAddr,
    pub log_level: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let addr = env::var("FLARE_TVL_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("FLARE_TVL_ADDR is not a socket address: {addr}"))?;

        Ok(Self {
            settings_path: env::var("FLARE_TVL_SETTINGS").ok(),
            addr,
            log_level: env::var("FLARE_TVL_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Dashboard settings from the configured file, or the built-in defaults.
    pub fn dashboard_settings(&self) -> Result<DashboardSettings> {
        match &self.settings_path {
            Some(path) => DashboardSettings::from_json_file(path)
                .with_context(|| format!("failed to load dashboard settings from {path}")),
            None => Ok(DashboardSettings::default()),
        }
    }
}
