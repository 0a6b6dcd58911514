use async_trait::async_trait;
use tracing::debug;

use crate::config::Settings;
use crate::error::{Result, ScrapeError};

/// Anything that can turn a URL into page text.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl<'a, T: PageSource + ?Sized> PageSource for &'a T {
    async fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url).await
    }
}

/// HTTP document source sending a fixed User-Agent on every request.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|source| ScrapeError::Transport {
                url: settings.base_url.clone(),
                source,
            })?;
        Ok(HttpSource { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let transport = |source: reqwest::Error| ScrapeError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport)?;

        // reqwest decodes per the charset header and falls back to UTF-8
        let body = response.text().await.map_err(transport)?;
        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
