//! Structural signals read from the document markup: layout, navigation
//! aids and on-page SEO elements.

use super::html::{self, meta_content};
use super::text::word_count;
use super::address::{self, LinkTarget};
use crate::types::signals::{DiscoverySignals, LayoutSignals};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use url::Url;

static RE_PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("paragraph regex"));
static RE_FONT_FAMILY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)font-family\s*:\s*([^;}>]+)").expect("font family regex"));
static RE_TEXT_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|[;\s"'{])color\s*:\s*(#[0-9a-f]{3,6}\b|[a-z]+)"#).expect("color regex")
});
static RE_MEDIA_QUERY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)@media[^{]*(?:max|min)-width").expect("media query regex"));
static RE_TOUCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)touch-action|ontouchstart|pointer\s*:\s*coarse|apple-mobile-web-app-capable|touch-icon")
        .expect("touch regex")
});
static RE_SEARCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<input\b[^>]*type\s*=\s*["']?search|role\s*=\s*["']search|<form\b[^>]*(?:action|class|id)\s*=\s*["'][^"']*search"#)
        .expect("search regex")
});
static RE_NAV_ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<(?:div|ul|section|header)\b[^>]*role\s*=\s*["']navigation"#)
        .expect("navigation role regex")
});
static RE_SITEMAP_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\b[^>]*href\s*=\s*["'][^"']*sitemap"#).expect("sitemap regex")
});
static RE_FEATURED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)class\s*=\s*["'][^"']*\b(?:featured|popular|trending|recommended|top-posts|editors-pick)"#)
        .expect("featured regex")
});
static RE_CATEGORY_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\b[^>]*(?:href\s*=\s*["'][^"']*/(?:category|categories|tag|tags|topic|topics)/|rel\s*=\s*["'][^"']*\b(?:tag|category))"#)
        .expect("category link regex")
});
static RE_JSON_LD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<script\b[^>]*type\s*=\s*["']application/ld\+json|\bitemscope\b"#)
        .expect("structured data regex")
});

const LIGHT_COLOR_NAMES: &[&str] = &[
    "white", "whitesmoke", "snow", "ivory", "ghostwhite", "gainsboro", "lightgray", "lightgrey",
    "silver", "beige", "linen",
];
/// Relative luminance at or above which text is considered too light.
pub const LIGHT_LUMINANCE: f64 = 0.7;

fn hex_luminance(hex: &str) -> Option<f64> {
    let digits = hex.trim_start_matches('#');
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |index: usize| -> Option<f64> {
        let value = u8::from_str_radix(expanded.get(index..index + 2)?, 16).ok()?;
        Some(f64::from(value) / 255.0)
    };
    Some(0.2126 * channel(0)? + 0.7152 * channel(2)? + 0.0722 * channel(4)?)
}

fn is_light_color(value: &str) -> bool {
    let value = value.to_ascii_lowercase();
    if value.starts_with('#') {
        hex_luminance(&value).is_some_and(|luminance| luminance >= LIGHT_LUMINANCE)
    } else {
        LIGHT_COLOR_NAMES.contains(&value.as_str())
    }
}

pub fn layout_signals(
    document: &str,
    metas: &[BTreeMap<String, String>],
    page_url: Option<&str>,
) -> LayoutSignals {
    let viewport = meta_content(metas, "viewport");
    let paragraph_words = RE_PARAGRAPH
        .captures_iter(document)
        .map(|caps| word_count(&html::fragment_text(&caps[1])))
        .filter(|words| *words > 0)
        .collect::<Vec<_>>();
    let avg_paragraph_words = if paragraph_words.is_empty() {
        0.0
    } else {
        f64::from(paragraph_words.iter().sum::<u32>()) / paragraph_words.len() as f64
    };
    let font_families = RE_FONT_FAMILY
        .captures_iter(document)
        .filter_map(|caps| {
            caps[1]
                .split(',')
                .next()
                .map(|family| family.trim().trim_matches(['\'', '"']).to_ascii_lowercase())
        })
        .filter(|family| !family.is_empty() && family != "inherit")
        .collect::<BTreeSet<_>>();

    LayoutSignals {
        has_viewport: viewport.is_some(),
        handheld_friendly: viewport
            .as_deref()
            .is_some_and(|content| content.contains("device-width"))
            || RE_MEDIA_QUERY.is_match(document),
        touch_optimized: RE_TOUCH.is_match(document),
        is_https: page_url.is_some_and(|page| address::url_signals(page).is_https),
        h1_count: html::count_tags(document, &["h1"]),
        paragraph_count: paragraph_words.len() as u32,
        avg_paragraph_words,
        font_family_count: font_families.len() as u32,
        light_text_styles: RE_TEXT_COLOR
            .captures_iter(document)
            .filter(|caps| is_light_color(&caps[1]))
            .count() as u32,
    }
}

pub fn discovery_signals(document: &str) -> DiscoverySignals {
    DiscoverySignals {
        has_search: RE_SEARCH.is_match(document),
        nav_count: html::count_tags(document, &["nav"])
            .saturating_add(RE_NAV_ROLE.find_iter(document).count() as u32),
        has_breadcrumbs: document.to_ascii_lowercase().contains("breadcrumb"),
        has_sitemap: RE_SITEMAP_LINK.is_match(document),
        featured_posts: RE_FEATURED.find_iter(document).count() as u32,
        category_links: RE_CATEGORY_LINK.find_iter(document).count() as u32,
    }
}

/// `noindex` in a robots meta tag removes the page from search results.
pub fn is_indexed(metas: &[BTreeMap<String, String>]) -> bool {
    ["robots", "googlebot"]
        .iter()
        .filter_map(|key| meta_content(metas, key))
        .all(|content| !content.to_ascii_lowercase().contains("noindex"))
}

pub fn schema_markup_count(document: &str) -> u32 {
    RE_JSON_LD.find_iter(document).count() as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub internal: u32,
    pub external: u32,
}

/// Classifies anchors against the page host. Relative links are internal;
/// fragments and non-http schemes are ignored.
pub fn link_counts(document: &str, page_url: Option<&str>) -> LinkCounts {
    let base = page_url.and_then(|page| Url::parse(page.trim()).ok());
    let page_host = base.as_ref().and_then(address::site_host);
    let mut counts = LinkCounts::default();

    for tag in html::opening_tags(document, &["a"]) {
        let Some(href) = html::attributes(tag).remove("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }
        match address::resolve(href, base.as_ref()) {
            LinkTarget::SamePage => counts.internal = counts.internal.saturating_add(1),
            LinkTarget::Web(target) => {
                if page_host.is_some() && address::site_host(&target) == page_host {
                    counts.internal = counts.internal.saturating_add(1);
                } else {
                    counts.external = counts.external.saturating_add(1);
                }
            }
            LinkTarget::Other => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_reads_viewport_paragraphs_and_fonts() {
        let document = r#"<head><meta name="viewport" content="width=device-width, initial-scale=1">
<style>body { font-family: "Inter", sans-serif; } code { font-family: monospace; }
.muted { color: #eee; } h1 { background-color: #fff; color: #222 }</style></head>
<body><h1>Title</h1><p>one two three four</p><p>five six</p><p></p></body>"#;
        let metas = html::meta_tags(document);
        let layout = layout_signals(document, &metas, Some("https://example.com/post"));
        assert!(layout.has_viewport);
        assert!(layout.handheld_friendly);
        assert!(!layout.touch_optimized);
        assert!(layout.is_https);
        assert_eq!(layout.h1_count, 1);
        assert_eq!(layout.paragraph_count, 2);
        assert_eq!(layout.avg_paragraph_words, 3.0);
        assert_eq!(layout.font_family_count, 2);
        assert_eq!(layout.light_text_styles, 1);
    }

    #[test]
    fn discovery_finds_navigation_aids() {
        let document = r#"<nav></nav><div role="navigation"></div>
<form action="/search"><input type="text"></form>
<ol class="breadcrumbs"></ol><a href="/sitemap.xml">map</a>
<div class="featured-post"></div><div class="popular"></div>
<a href="/category/rust/">Rust</a><a rel="tag" href="/t/cli">cli</a>"#;
        let signals = discovery_signals(document);
        assert!(signals.has_search);
        assert_eq!(signals.nav_count, 2);
        assert!(signals.has_breadcrumbs);
        assert!(signals.has_sitemap);
        assert_eq!(signals.featured_posts, 2);
        assert_eq!(signals.category_links, 2);
    }

    #[test]
    fn noindex_marks_page_unindexed() {
        let metas = html::meta_tags(r#"<meta name="robots" content="NOINDEX, follow">"#);
        assert!(!is_indexed(&metas));
        assert!(is_indexed(&[]));
    }

    #[test]
    fn links_are_split_by_host() {
        let document = r##"<a href="/about">a</a><a href="https://www.example.com/x">b</a>
<a href="https://other.org/">c</a><a href="#top">d</a><a href="mailto:me@example.com">e</a>
<a href="related-post">f</a>"##;
        let counts = link_counts(document, Some("https://example.com/blog/post"));
        assert_eq!(counts, LinkCounts { internal: 3, external: 1 });
    }

    #[test]
    fn ports_and_userinfo_do_not_make_links_external() {
        let document = r#"<a href="https://example.com:443/x">a</a>
<a href="https://editor@Example.com/y">b</a><a href="https://example.com:8443/z">c</a>
<a href="//cdn.example.org/lib.js">d</a>"#;
        let counts = link_counts(document, Some("https://example.com/blog/post"));
        assert_eq!(counts, LinkCounts { internal: 3, external: 1 });
    }

    #[test]
    fn relative_links_without_page_address_are_internal() {
        let document = r#"<a href="/about">a</a><a href="https://other.org/">b</a>"#;
        assert_eq!(
            link_counts(document, None),
            LinkCounts { internal: 1, external: 1 }
        );
    }
}
