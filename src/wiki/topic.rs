// src/wiki/topic.rs
// =============================================================================
// This module turns any way of writing a topic into one canonical identifier.
//
// A user (or a link on a page) can name the same article in several ways:
// - Full URL:       https://en.wikipedia.org/wiki/Kevin_Bacon
// - Relative path:  /wiki/Kevin_Bacon
// - Raw title:      Kevin Bacon
//
// All of them must normalize to "Kevin_Bacon" so the visited set can
// deduplicate them. The identifier is also what we append to the base URL
// when fetching, so it is percent-encoded.
//
// Rust concepts:
// - &str vs String: we borrow the input and return a new owned String
// - const: compile-time constants for prefixes and the encode set
// =============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The article we are diving towards. Not configurable.
pub const TARGET_TOPIC: &str = "Kevin_Bacon";

/// Canonical article URL prefix.
pub const WIKI_URL_PREFIX: &str = "https://en.wikipedia.org/wiki/";

/// Site-relative link prefix, as it appears in href attributes.
pub const WIKI_RELATIVE_PREFIX: &str = "/wiki/";

// Characters that stay as-is in a topic identifier.
//
// This is what MediaWiki leaves bare in article paths (alphanumerics plus
// ;,/:@&=+$-_.!~*()). '?', '#' and '\'' are encoded because they would end
// the path or differ from the hrefs on real pages. '%' is left alone, so an
// already-encoded identifier survives a second pass unchanged.
const TOPIC_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b'%');

// Normalizes a topic into its canonical identifier
//
// Steps:
// 1. Spaces become underscores (every space, not just the first)
// 2. Strip the full article URL prefix, or else the /wiki/ prefix
// 3. Drop any #section fragment; it points into the same article
// 4. Percent-encode what is left for safe use in a URL path
//
// Never fails: any string has a canonical form.
//
// Example:
//   "https://en.wikipedia.org/wiki/Kevin_Bacon" -> "Kevin_Bacon"
//   "Footloose (1984 film)" -> "Footloose_(1984_film)"
pub fn normalize_topic(raw: &str) -> String {
    let cleaned = raw.replace(' ', "_");

    let stripped = if let Some(rest) = cleaned.strip_prefix(WIKI_URL_PREFIX) {
        rest
    } else if let Some(rest) = cleaned.strip_prefix(WIKI_RELATIVE_PREFIX) {
        rest
    } else {
        cleaned.as_str()
    };

    let article = match stripped.split_once('#') {
        Some((article, _section)) => article,
        None => stripped,
    };

    utf8_percent_encode(article, TOPIC_ENCODE_SET).to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does strip_prefix return?
//    - Option<&str>: Some(rest) if the string started with the prefix
//    - The rest borrows from `cleaned`, so no new allocation is needed
//
// 2. What is an AsciiSet?
//    - A set of ASCII bytes that should be percent-encoded
//    - NON_ALPHANUMERIC encodes everything except A-Z, a-z, 0-9
//    - .remove(b'x') takes a byte out of the set so it is left alone
//    - Non-ASCII bytes (é, ü, ...) are always encoded
//
// 3. Why not encode '%'?
//    - "Caf%C3%A9" is already encoded; encoding it again would give
//      "Caf%25C3%25A9", a different identifier for the same article
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_forms_normalize_the_same() {
        let from_url = normalize_topic("https://en.wikipedia.org/wiki/Kevin_Bacon");
        let from_path = normalize_topic("/wiki/Kevin_Bacon");
        let from_title = normalize_topic("Kevin_Bacon");
        assert_eq!(from_url, "Kevin_Bacon");
        assert_eq!(from_path, "Kevin_Bacon");
        assert_eq!(from_title, "Kevin_Bacon");
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(normalize_topic("Kevin Bacon"), TARGET_TOPIC);
        assert_eq!(
            normalize_topic("Footloose (1984 film)"),
            "Footloose_(1984_film)"
        );
    }

    #[test]
    fn test_non_ascii_is_encoded() {
        assert_eq!(normalize_topic("/wiki/Café"), "Caf%C3%A9");
    }

    #[test]
    fn test_title_and_encoded_href_agree() {
        let from_title = normalize_topic("Who's Afraid of Virginia Woolf?");
        let from_href = normalize_topic("/wiki/Who%27s_Afraid_of_Virginia_Woolf%3F");
        assert_eq!(from_title, "Who%27s_Afraid_of_Virginia_Woolf%3F");
        assert_eq!(from_title, from_href);
    }

    #[test]
    fn test_question_mark_stays_in_the_path() {
        let topic = normalize_topic("Who Framed Roger Rabbit?");
        let url = url::Url::parse(&format!("{}{}", WIKI_URL_PREFIX, topic)).unwrap();
        assert_eq!(url.path(), "/wiki/Who_Framed_Roger_Rabbit%3F");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_section_fragment_is_dropped() {
        assert_eq!(normalize_topic("/wiki/Kevin_Bacon#Career"), TARGET_TOPIC);
        assert_eq!(normalize_topic("Tremors (film)#Cast"), "Tremors_(film)");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "https://en.wikipedia.org/wiki/Kevin_Bacon",
            "/wiki/Apollo_13_(film)",
            "The Big Picture",
            "Café au lait",
            "Caf%C3%A9",
            "Tremors#Cast",
            "Who's Afraid of Virginia Woolf?",
            "100% Pure",
        ];
        for input in inputs {
            let once = normalize_topic(input);
            assert_eq!(normalize_topic(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_only_one_prefix_is_stripped() {
        assert_eq!(
            normalize_topic("https://en.wikipedia.org/wiki/Category:Actors"),
            "Category:Actors"
        );
        assert_eq!(normalize_topic("/wiki/wiki/Thing"), "wiki/Thing");
    }
}
