pub mod extract;

use scraper::{ElementRef, Html, Selector};

/// Parse raw page text into a navigable document.
pub fn parse_document(text: &str) -> Html {
    Html::parse_document(text)
}

/// First element matching `selector` anywhere in the document.
pub fn first<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// Full descendant text with whitespace runs collapsed to single spaces.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize(&el.text().collect::<String>())
}

/// Text of the element's direct text children only.
pub fn own_text(el: ElementRef<'_>) -> String {
    let own: String = el
        .children()
        .filter_map(|n| n.value().as_text())
        .map(|t| &**t)
        .collect();
    normalize(&own)
}

/// Element children in document order, skipping text and comment nodes.
pub fn element_children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

fn normalize(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ──
