use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::parser::{element_children, first, text_of};

static RATING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".rating-rating").unwrap());
static STAR_BOX_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".star-box").unwrap());
static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}\.\d)\s*/\s*10").unwrap());

/// Rating as displayed, e.g. "8.7" from "8.7/10".
///
/// A region whose text has no `x.y/10` shape is returned as-is so the
/// mismatch surfaces when the value is read.
pub fn rating(doc: &Html) -> Result<String> {
    let text = first(doc, &RATING_SEL)
        .map(text_of)
        .ok_or(ScrapeError::NotFound("rating"))?;
    Ok(RATING_RE
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .unwrap_or(text))
}

/// Digits of the vote summary (third child of the star box). Empty means no votes.
pub fn votes(doc: &Html) -> String {
    first(doc, &STAR_BOX_SEL)
        .and_then(|sb| element_children(sb).nth(2))
        .map(text_of)
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect()
}

// ── Tests ──
