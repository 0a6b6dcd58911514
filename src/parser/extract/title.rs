use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::parser::{first, text_of};

static TITLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\(.*\).*").unwrap());
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((\d{4})\)").unwrap());

fn title_text(doc: &Html) -> Result<String> {
    first(doc, &TITLE_SEL)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .ok_or(ScrapeError::NotFound("title"))
}

/// "The Matrix (1999) - IMDb" → "The Matrix".
pub fn title(doc: &Html) -> Result<String> {
    let text = title_text(doc)?;
    Ok(SUFFIX_RE.replace(&text, "").into_owned())
}

/// Four-digit year inside the title's parentheses; the whole text when absent.
pub fn year(doc: &Html) -> Result<String> {
    let text = title_text(doc)?;
    Ok(YEAR_RE
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .unwrap_or(text))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    fn doc(title: &str) -> Html {
        parse_document(&format!("<html><head><title>{}</title></head><body></body></html>", title))
    }

    #[test]
    fn strips_year_and_site_suffix() {
        let d = doc("The Matrix (1999) - IMDb");
        assert_eq!(title(&d).unwrap(), "The Matrix");
        assert_eq!(year(&d).unwrap(), "1999");
    }

    #[test]
    fn series_year_range() {
        let d = doc("\"Lost\" (2004) - IMDb");
        assert_eq!(title(&d).unwrap(), "\"Lost\"");
        assert_eq!(year(&d).unwrap(), "2004");
    }

    #[test]
    fn no_parenthetical_leaves_text() {
        let d = doc("Untitled Project");
        assert_eq!(title(&d).unwrap(), "Untitled Project");
        assert_eq!(year(&d).unwrap(), "Untitled Project");
    }

    #[test]
    fn non_year_parenthetical_keeps_text_for_year() {
        let d = doc("Heat (TV) - IMDb");
        assert_eq!(title(&d).unwrap(), "Heat");
        assert_eq!(year(&d).unwrap(), "Heat (TV) - IMDb");
    }

    #[test]
    fn missing_title_is_not_found() {
        let d = parse_document("<html><body><p>no head</p></body></html>");
        assert!(matches!(title(&d), Err(ScrapeError::NotFound("title"))));
        assert!(matches!(year(&d), Err(ScrapeError::NotFound("title"))));
    }
}
