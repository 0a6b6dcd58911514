//! Scrapes title pages into typed movie and series records.
//!
//! A [`Scraper`] fetches the title page of a catalog id, extracts the scalar
//! fields, then fetches either the release-info page (movies) or the episode
//! list (series). The resulting [`Record`] keeps page text and converts it on
//! read, so a malformed field only fails the accessor that reads it.

pub mod builder;
pub mod config;
pub mod error;
pub mod fetch;
pub mod parser;
pub mod record;

pub use builder::{build_movie, build_series, Scraper};
pub use config::Settings;
pub use error::{Result, ScrapeError};
pub use fetch::{HttpSource, PageSource};
pub use record::{Mode, Record, Schedule};
