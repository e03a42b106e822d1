//! Configuration for tplink-archer
//!
//! Centralized configuration with sensible defaults.

use crate::error::{ArcherError, Result};

/// Connection settings for one router
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Router Configuration
    // -------------------------------------------------------------------------
    /// Router address: `192.168.0.1`, `192.168.0.1:8080` or a full `http://` URL
    pub router_url: String,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Request timeout (milliseconds), applied to every HTTP exchange
    pub timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Backup Configuration
    // -------------------------------------------------------------------------
    /// File name used when saving a configuration backup to a directory
    pub backup_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            router_url: "192.168.0.1".to_string(),
            timeout_ms: 10_000,
            backup_file_name: "conf.bin".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Root URL of the router web interface, always ending in `/`
    ///
    /// Bare hosts get an `http://` scheme since the firmware does not serve TLS.
    pub fn base_url(&self) -> Result<String> {
        normalize_base_url(&self.router_url)
    }
}

/// Turn a user supplied router address into `scheme://host[:port]/`
pub fn normalize_base_url(router_url: &str) -> Result<String> {
    let trimmed = router_url.trim();
    if trimmed.is_empty() {
        return Err(ArcherError::Config("router URL is empty".to_string()));
    }

    let mut url = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    if !url.ends_with('/') {
        url.push('/');
    }
    Ok(url)
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the router address
    pub fn router_url(mut self, url: impl Into<String>) -> Self {
        self.config.router_url = url.into();
        self
    }

    /// Set the request timeout (in milliseconds)
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeout_ms = ms;
        self
    }

    /// Set the file name for saved configuration backups
    pub fn backup_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.backup_file_name = name.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
