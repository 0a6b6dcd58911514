pub mod episodes;
pub mod infobar;
pub mod rating;
pub mod releases;
pub mod title;

use scraper::Html;

use crate::error::Result;

/// Scalar fields read from the primary title page, still as page text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimaryFields {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub votes: String,
    pub genre: String,
    pub runtime: String,
}

/// Run every scalar extractor over the primary page.
pub fn extract_primary(doc: &Html) -> Result<PrimaryFields> {
    Ok(PrimaryFields {
        title: title::title(doc)?,
        year: title::year(doc)?,
        rating: rating::rating(doc)?,
        votes: rating::votes(doc),
        genre: infobar::genre(doc)?,
        runtime: infobar::runtime(doc)?,
    })
}

// ── Tests ──
