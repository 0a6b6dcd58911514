use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::parser::{first, text_of};

static INFOBAR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".infobar").unwrap());
static GENRE_LINK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"[href^="/genre/"]"#).unwrap());
static RUNTIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*min").unwrap());

fn infobar(doc: &Html) -> Result<ElementRef<'_>> {
    first(doc, &INFOBAR_SEL).ok_or(ScrapeError::NotFound("infobar"))
}

/// Genre links of the infobar, joined with ", ".
pub fn genre(doc: &Html) -> Result<String> {
    let genres: Vec<String> = infobar(doc)?
        .select(&GENRE_LINK_SEL)
        .map(text_of)
        .filter(|g| !g.is_empty())
        .collect();
    Ok(genres.join(", "))
}

/// Minutes from the first "<n> min" in the infobar; empty when there is none.
pub fn runtime(doc: &Html) -> Result<String> {
    let text = text_of(infobar(doc)?);
    Ok(RUNTIME_RE
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default())
}

// ── Tests ──
