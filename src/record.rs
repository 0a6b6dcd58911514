use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::error::{Result, ScrapeError};
use crate::parser::extract::episodes::episode_key;
use crate::parser::extract::PrimaryFields;

static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d{1,2}\s+[A-Za-z]+\s+\d{4})").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    Movie,
    TvShow,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Movie => f.write_str("movie"),
            Mode::TvShow => f.write_str("TV show"),
        }
    }
}

/// The mode-specific map of a record. Only one of the two ever exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    /// Country → release date text.
    Cinema(BTreeMap<String, String>),
    /// "Season n, Episode m" → air date text.
    Episodes(BTreeMap<String, String>),
}

impl Schedule {
    pub fn mode(&self) -> Mode {
        match self {
            Schedule::Cinema(_) => Mode::Movie,
            Schedule::Episodes(_) => Mode::TvShow,
        }
    }
}

/// Everything scraped for one title. Fields are kept as page text and
/// converted when read.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    url: String,
    external_id: String,
    title: String,
    year: String,
    rating: String,
    votes: String,
    genre: String,
    runtime: String,
    schedule: Schedule,
}

impl Record {
    pub(crate) fn new(
        url: String,
        external_id: String,
        primary: PrimaryFields,
        schedule: Schedule,
    ) -> Self {
        Record {
            url,
            external_id,
            title: primary.title,
            year: primary.year,
            rating: primary.rating,
            votes: primary.votes,
            genre: primary.genre,
            runtime: primary.runtime,
            schedule,
        }
    }

    pub fn mode(&self) -> Mode {
        self.schedule.mode()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The id exactly as supplied by the caller.
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn id(&self) -> Result<u64> {
        parse_number("id", &self.external_id)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Rating on the 0–10 scale.
    pub fn rating(&self) -> Result<f64> {
        let value: f64 = self
            .rating
            .parse()
            .map_err(|_| ScrapeError::conversion("rating", &self.rating))?;
        if !(0.0..=10.0).contains(&value) {
            return Err(ScrapeError::conversion("rating", &self.rating));
        }
        Ok(value)
    }

    /// Number of votes; a page without a vote count has zero.
    pub fn votes(&self) -> Result<u64> {
        if self.votes.is_empty() {
            return Ok(0);
        }
        parse_number("votes", &self.votes)
    }

    pub fn runtime_minutes(&self) -> Result<u32> {
        parse_number("runtime", &self.runtime)
    }

    /// All episode air dates. Series records only.
    pub fn episodes(&self) -> Result<&BTreeMap<String, String>> {
        match &self.schedule {
            Schedule::Episodes(eps) => Ok(eps),
            Schedule::Cinema(_) => Err(self.wrong_mode("episodes")),
        }
    }

    /// All release dates by country. Movie records only.
    pub fn cinema_dates(&self) -> Result<&BTreeMap<String, String>> {
        match &self.schedule {
            Schedule::Cinema(dates) => Ok(dates),
            Schedule::Episodes(_) => Err(self.wrong_mode("cinema_dates")),
        }
    }

    /// Air date text of one episode, `None` if the episode list lacks it.
    pub fn episode(&self, season: u32, episode: u32) -> Result<Option<&str>> {
        let eps = self
            .episodes()
            .map_err(|_| self.wrong_mode("episode"))?;
        Ok(eps.get(&episode_key(season, episode)).map(String::as_str))
    }

    /// Release date in `country`, `None` if the country is not listed.
    pub fn cinema_date(&self, country: &str) -> Result<Option<NaiveDate>> {
        let dates = self
            .cinema_dates()
            .map_err(|_| self.wrong_mode("cinema_date"))?;
        dates.get(country).map(|text| parse_release_date(text)).transpose()
    }

    fn wrong_mode(&self, field: &'static str) -> ScrapeError {
        ScrapeError::InvalidForMode {
            field,
            mode: self.mode(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, text: &str) -> Result<T> {
    text.parse().map_err(|_| ScrapeError::conversion(field, text))
}

/// "15 Mar 2005" or "31 March 1999 (premiere)" → calendar date.
pub fn parse_release_date(text: &str) -> Result<NaiveDate> {
    let caps = DATE_PREFIX_RE
        .captures(text)
        .ok_or_else(|| ScrapeError::conversion("cinema_date", text))?;
    // "Mar" and "March" need different month specifiers
    NaiveDate::parse_from_str(&caps[1], "%d %b %Y")
        .or_else(|_| NaiveDate::parse_from_str(&caps[1], "%d %B %Y"))
        .map_err(|_| ScrapeError::conversion("cinema_date", text))
}

// ── Tests ──
