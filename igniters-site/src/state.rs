use anyhow::Result;

use crate::config::SiteConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    // Config is reloaded on each request to pick up file edits
}

impl AppState {
    pub fn new() -> Result<Self> {
        // Verify the config parses at startup
        let _ = SiteConfig::load()?;

        let http = reqwest::Client::builder()
            .user_agent(format!("igniters-site/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(AppState { http })
    }

    pub fn config(&self) -> Result<SiteConfig> {
        SiteConfig::load()
    }
}
