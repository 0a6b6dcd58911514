use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::{first, text_of};

static CONTENT_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#tn15content").unwrap());
static TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());
static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Country → release date text from the first table of the main content.
pub fn extract(doc: &Html) -> BTreeMap<String, String> {
    let mut dates = BTreeMap::new();

    let Some(table) = first(doc, &CONTENT_SEL).and_then(|c| c.select(&TABLE_SEL).next()) else {
        return dates;
    };

    for row in table.select(&ROW_SEL) {
        let mut cells = row.select(&CELL_SEL);
        // header rows (th only) and single-cell rows carry no pair
        if let (Some(country), Some(date)) = (cells.next(), cells.next()) {
            dates.insert(text_of(country), text_of(date));
        }
    }

    dates
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn rows_become_pairs() {
        let d = parse_document(
            "<div id=\"tn15content\"><table>\
             <tr><th>Country</th><th>Date</th></tr>\
             <tr><td><a href=\"/calendar/?region=us\">USA</a></td><td>15 Mar 2005</td><td></td></tr>\
             <tr><td>France</td><td>6 April 2005</td></tr>\
             <tr><td>lonely</td></tr>\
             </table></div>",
        );
        let dates = extract(&d);
        assert_eq!(dates.len(), 2);
        assert_eq!(dates["USA"], "15 Mar 2005");
        assert_eq!(dates["France"], "6 April 2005");
    }

    #[test]
    fn only_first_table_counts() {
        let d = parse_document(
            "<div id=\"tn15content\">\
             <table><tr><td>USA</td><td>15 Mar 2005</td></tr></table>\
             <table><tr><td>Also Known As</td><td>Other</td></tr></table></div>",
        );
        let dates = extract(&d);
        assert_eq!(dates.len(), 1);
        assert!(!dates.contains_key("Also Known As"));
    }

    #[test]
    fn missing_content_is_empty() {
        assert!(extract(&parse_document("<table><tr><td>USA</td><td>1 Jan 2000</td></tr></table>")).is_empty());
        assert!(extract(&parse_document("<div id=\"tn15content\"><p>none</p></div>")).is_empty());
    }

    #[test]
    fn matrix_release_info() {
        let html = std::fs::read_to_string("tests/fixtures/matrix_releaseinfo.html").unwrap();
        let dates = extract(&parse_document(&html));
        assert_eq!(dates["USA"], "31 March 1999");
        assert_eq!(dates["Japan"], "11 September 1999 (premiere)");
        assert_eq!(dates["Germany"], "soon");
    }
}
