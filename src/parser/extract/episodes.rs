use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::{element_children, own_text, text_of};

static FILTER_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".filter-all").unwrap());
static HEADING_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());

/// "Season 1, Episode 2" → air date text, one entry per episode filter block.
pub fn extract(doc: &Html) -> BTreeMap<String, String> {
    let mut episodes = BTreeMap::new();

    for block in doc.select(&FILTER_SEL) {
        let Some(heading) = block.select(&HEADING_SEL).next() else {
            continue;
        };
        let label = own_text(heading).replace(':', "").trim().to_string();
        let aired = element_children(heading)
            .next()
            .map(text_of)
            .unwrap_or_default();
        // later blocks with the same label win
        episodes.insert(label, aired);
    }

    episodes
}

/// Map key for one episode.
pub fn episode_key(season: u32, episode: u32) -> String {
    format!("Season {}, Episode {}", season, episode)
}

// ── Tests ──
