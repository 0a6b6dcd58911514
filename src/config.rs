use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "http://akas.imdb.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows; U; Windows NT 6.1; \
     en-GB; rv:1.9.2.13) Gecko/20101203 Firefox/3.6.13";

/// Where pages are fetched from and how the client identifies itself.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `imdb_scraper.toml` (optional), then `IMDB_*` env vars.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(File::with_name("imdb_scraper").required(false))
            .add_source(Environment::with_prefix("IMDB"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
