use thiserror::Error;

use crate::record::Mode;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network, URL or HTTP status failure while fetching a page.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A region the page must contain was missing from the markup.
    #[error("required region `{0}` not found in page")]
    NotFound(&'static str),

    #[error("`{field}` is not available for a {mode} record")]
    InvalidForMode { field: &'static str, mode: Mode },

    /// Stored text did not match the numeric/date pattern of the field.
    #[error("cannot convert {field} value {value:?}")]
    Conversion { field: &'static str, value: String },

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ScrapeError {
    pub(crate) fn conversion(field: &'static str, value: &str) -> Self {
        ScrapeError::Conversion {
            field,
            value: value.to_string(),
        }
    }
}
