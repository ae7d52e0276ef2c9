//! Regex-level HTML helpers. These never fail: malformed markup just yields
//! fewer matches.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static RE_HIDDEN_BLOCKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style|noscript|template)\b[^>]*>.*?</(script|style|noscript|template)\s*>|<!--.*?-->")
        .expect("hidden block regex")
});
static RE_BLOCK_BREAKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(p|div|br|li|h[1-6]|section|article|tr|blockquote|header|footer|nav)\b[^>]*>")
        .expect("block break regex")
});
static RE_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag regex"));
static RE_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t\r\f]+").expect("whitespace regex"));
static RE_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("attribute regex")
});
static RE_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("title regex"));
static RE_BODY_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<body\b[^>]*>").expect("body regex"));

/// Visible text of a document: hidden blocks and tags removed, entities
/// decoded, block elements turned into line breaks.
pub fn visible_text(html: &str) -> String {
    let without_hidden = RE_HIDDEN_BLOCKS.replace_all(html, " ");
    let with_breaks = RE_BLOCK_BREAKS.replace_all(&without_hidden, "\n");
    let stripped = RE_TAGS.replace_all(&with_breaks, " ");
    let decoded = decode_entities(&stripped);
    decoded
        .lines()
        .map(|line| RE_WS.replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strips tags from an HTML fragment and collapses whitespace.
pub fn fragment_text(fragment: &str) -> String {
    let stripped = RE_TAGS.replace_all(fragment, " ");
    decode_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decodes named and numeric character references. Non-breaking spaces
/// become plain spaces so they collapse with the surrounding whitespace.
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).replace('\u{a0}', " ")
}

/// Counts opening tags with one of the given names.
pub fn count_tags(html: &str, names: &[&str]) -> u32 {
    opening_tags(html, names).len() as u32
}

/// Opening tags (the full `<name ...>` text) with one of the given names.
pub fn opening_tags<'a>(html: &'a str, names: &[&str]) -> Vec<&'a str> {
    if names.is_empty() {
        return Vec::new();
    }
    let pattern = format!(r"(?i)<(?:{})\b[^>]*>", names.join("|"));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(html).map(|m| m.as_str()).collect(),
        Err(err) => {
            tracing::warn!(error = %err, "tag pattern rejected");
            Vec::new()
        }
    }
}

/// Attributes of a single opening tag, keys lowercased.
pub fn attributes(tag: &str) -> BTreeMap<String, String> {
    RE_ATTRIBUTE
        .captures_iter(tag)
        .map(|caps| {
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| decode_entities(m.as_str()))
                .unwrap_or_default();
            (caps[1].to_ascii_lowercase(), value)
        })
        .collect()
}

/// Attribute maps of every `<meta>` tag.
pub fn meta_tags(html: &str) -> Vec<BTreeMap<String, String>> {
    opening_tags(html, &["meta"])
        .into_iter()
        .map(attributes)
        .collect()
}

/// `content` of the first meta tag whose `name` or `property` matches.
pub fn meta_content(metas: &[BTreeMap<String, String>], key: &str) -> Option<String> {
    metas
        .iter()
        .find(|attrs| {
            attrs
                .get("name")
                .or_else(|| attrs.get("property"))
                .is_some_and(|name| name.eq_ignore_ascii_case(key))
        })
        .and_then(|attrs| attrs.get("content").cloned())
}

pub fn title(html: &str) -> Option<String> {
    RE_TITLE
        .captures(html)
        .map(|caps| fragment_text(&caps[1]))
        .filter(|title| !title.is_empty())
}

/// The markup after the opening `<body>` tag, or the whole document.
pub fn body(html: &str) -> &str {
    RE_BODY_START
        .find(html)
        .map(|m| &html[m.end()..])
        .unwrap_or(html)
}

/// Largest prefix of `input` no longer than `max_bytes` that ends on a char
/// boundary.
pub fn prefix(input: &str, max_bytes: usize) -> &str {
    let mut end = max_bytes.min(input.len());
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}
