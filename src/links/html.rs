// src/links/html.rs
// =============================================================================
// This module extracts anchor targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, so broken markup still parses
//
// Nothing is resolved here. We return the href text exactly as written
// (trimmed), and links::scope decides what it points to.
// =============================================================================

use scraper::{Html, Selector};

// Extracts every href from every <a href="..."> in the document
//
// Parameters:
//   html: the page body
//
// Returns: the href values in document order, duplicates included
//
// Example:
//   html = "<a href='/docs/site/'>Site</a> <a>no href</a>"
//   result = ["/docs/site/"]
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" only matches anchors that actually carry an href
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}
