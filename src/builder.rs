use tracing::{debug, info};

use crate::config::Settings;
use crate::error::Result;
use crate::fetch::{HttpSource, PageSource};
use crate::parser::extract::{self, episodes, releases};
use crate::parser::parse_document;
use crate::record::{Mode, Record, Schedule};

/// Builds records by fetching a title page and its mode-specific sub-page.
pub struct Scraper<S = HttpSource> {
    source: S,
    base_url: String,
}

impl Scraper<HttpSource> {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Scraper::with_source(HttpSource::new(settings)?, &settings.base_url))
    }
}

impl<S: PageSource> Scraper<S> {
    pub fn with_source(source: S, base_url: &str) -> Self {
        Scraper {
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn title_url(&self, id: &str) -> String {
        format!("{}/title/{}", self.base_url, id)
    }

    /// Title page plus release info.
    pub async fn build_movie(&self, id: &str) -> Result<Record> {
        self.build(id, Mode::Movie).await
    }

    /// Title page plus episode list.
    pub async fn build_series(&self, id: &str) -> Result<Record> {
        self.build(id, Mode::TvShow).await
    }

    async fn build(&self, id: &str, mode: Mode) -> Result<Record> {
        info!("Building {} record for {}", mode, id);
        let url = self.title_url(id);

        let primary = {
            let page = self.source.fetch(&url).await?;
            extract::extract_primary(&parse_document(&page))?
        };

        let schedule = match mode {
            Mode::Movie => {
                let page = self.source.fetch(&format!("{}/releaseinfo", url)).await?;
                let dates = releases::extract(&parse_document(&page));
                debug!("{}: {} release dates", id, dates.len());
                Schedule::Cinema(dates)
            }
            Mode::TvShow => {
                let page = self.source.fetch(&format!("{}/episodes", url)).await?;
                let eps = episodes::extract(&parse_document(&page));
                debug!("{}: {} episodes", id, eps.len());
                Schedule::Episodes(eps)
            }
        };

        info!("Built {}: {} ({})", id, primary.title, primary.year);
        Ok(Record::new(url, id.to_string(), primary, schedule))
    }
}

/// Build a movie record using settings from the environment.
pub async fn build_movie(id: &str) -> Result<Record> {
    Scraper::new(&Settings::load()?)?.build_movie(id).await
}

/// Build a series record using settings from the environment.
pub async fn build_series(id: &str) -> Result<Record> {
    Scraper::new(&Settings::load()?)?.build_series(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scraper(base_url: &str) -> Scraper {
        let source = HttpSource::new(&Settings::default()).unwrap();
        Scraper::with_source(source, base_url)
    }

    #[test]
    fn title_url_ignores_trailing_slashes() {
        let plain = scraper("http://localhost:8080");
        let slashed = scraper("http://localhost:8080//");
        assert_eq!(plain.title_url("0133093"), "http://localhost:8080/title/0133093");
        assert_eq!(slashed.title_url("0133093"), plain.title_url("0133093"));
    }

    #[test]
    fn settings_base_url_is_trimmed_once() {
        let settings = Settings::default().with_base_url("http://localhost:8080/");
        let scraper = Scraper::new(&settings).unwrap();
        assert_eq!(scraper.title_url("1"), "http://localhost:8080/title/1");
    }
}
