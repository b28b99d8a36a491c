//! Site server configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use igniters_core::source::DEFAULT_BASE_URL;

const DEFAULT_PORT: u16 = 8080;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_upstream_base() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Configuration at ~/.config/igniters/site.toml
///
/// Both fields are optional; a missing file means defaults, so the server
/// runs with zero setup.
#[derive(Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL the serverless functions live under
    #[serde(default = "default_upstream_base")]
    pub upstream_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            port: default_port(),
            upstream_base: default_upstream_base(),
        }
    }
}

impl SiteConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("igniters");

        Ok(config_dir.join("site.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(SiteConfig::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
