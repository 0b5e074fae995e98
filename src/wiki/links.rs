// src/wiki/links.rs
// =============================================================================
// This module extracts article links from a fetched Wikipedia page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
//
// Only links inside the main content container (the element with
// id="content") count. Older skins use a <div>, Vector 2022 a <main>.
// Navigation, sidebars and footers live outside of it.
//
// A link is kept when:
// - its href starts with /wiki/ (no external links, no anchors)
// - after normalization it is not in a reserved namespace (File:, Help:, ...)
// - it does not point at a missing article (ends with redlink=1)
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;

use super::topic::{normalize_topic, WIKI_RELATIVE_PREFIX};

// Namespaces that are not articles
const RESERVED_NAMESPACES: [&str; 8] = [
    "Wikipedia:",
    "File:",
    "Help:",
    "Category:",
    "Template:",
    "Template_talk:",
    "Special:",
    "Portal:",
];

// Marker that the linked article does not exist yet
const BROKEN_LINK_SUFFIX: &str = "redlink=1";

// Extracts all in-scope article links from page markup
//
// Parameters:
//   html: the page markup (borrowed as &str)
//
// Returns: normalized topic identifiers, deduplicated, in the order they
// first appear on the page. An empty Vec is a valid answer.
//
// Example:
//   html = r#"<div id="content"><a href="/wiki/Footloose">F</a></div>"#
//   result = ["Footloose"]
pub fn extract_topic_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = Selector::parse("#content a[href]").unwrap();

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if !href.starts_with(WIKI_RELATIVE_PREFIX) {
            continue;
        }

        let topic = normalize_topic(href);
        if is_article_topic(&topic) && seen.insert(topic.clone()) {
            links.push(topic);
        }
    }

    links
}

// Checks that a normalized topic points at a real article
fn is_article_topic(topic: &str) -> bool {
    !RESERVED_NAMESPACES
        .iter()
        .any(|namespace| topic.starts_with(namespace))
        && !topic.ends_with(BROKEN_LINK_SUFFIX)
}
