//! Ad indicator counts over raw markup.

use super::html;
use crate::types::signals::{AdSignals, AdTypeCounts};
use once_cell::sync::Lazy;
use regex::Regex;

pub const GOOGLE_ADS: &[&str] = &["googleads", "adsbygoogle", "googlesyndication"];
pub const DOUBLECLICK: &[&str] = &["doubleclick"];
pub const GENERAL: &[&str] = &["advertisement", "ad-banner", "banner-ad"];
pub const POPUPS: &[&str] = &["popup", "modal", "overlay"];
pub const CONTAINERS: &[&str] = &["ad-container", "ad-unit", "ad-slot", "ad-wrapper"];
pub const VIDEO: &[&str] = &["video-ad", "preroll", "midroll"];
pub const DISPLAY: &[&str] = &["display-ad", "banner", "leaderboard"];
pub const SPONSORED: &[&str] = &["sponsored", "promoted"];

/// Share of the body treated as the first screen.
pub const ABOVE_FOLD_FRACTION: usize = 5;

static RE_OPEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<[a-z][a-z0-9-]*\b[^>]*>").expect("open tag regex"));
static RE_STICKY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)position\s*:\s*(?:fixed|sticky)|\b(?:sticky|fixed)(?:\b|_)")
        .expect("sticky regex")
});
static RE_AD_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:ads?|advert\w*|sponsored|adsbygoogle|banner)\b|\bad_|_ad\b")
        .expect("ad marker regex")
});
static RE_AUTOPLAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(?:video|audio)\b[^>]*\bautoplay\b").expect("autoplay regex")
});

fn count_indicators(lower: &str, indicators: &[&str]) -> u32 {
    indicators
        .iter()
        .map(|indicator| lower.matches(indicator).count() as u32)
        .fold(0, u32::saturating_add)
}

pub fn ad_type_counts(document: &str) -> AdTypeCounts {
    let lower = document.to_lowercase();
    AdTypeCounts {
        google_ads: count_indicators(&lower, GOOGLE_ADS),
        doubleclick: count_indicators(&lower, DOUBLECLICK),
        general: count_indicators(&lower, GENERAL),
        popups: count_indicators(&lower, POPUPS),
        containers: count_indicators(&lower, CONTAINERS),
        video: count_indicators(&lower, VIDEO),
        display: count_indicators(&lower, DISPLAY),
        sponsored: count_indicators(&lower, SPONSORED),
    }
}

/// Indicators inside the first fifth of the body markup.
pub fn above_fold_ads(document: &str) -> u32 {
    let body = html::body(document);
    let first_screen = html::prefix(body, body.len() / ABOVE_FOLD_FRACTION);
    ad_type_counts(first_screen).total()
}

/// Elements that are both pinned to the viewport and marked as ads.
pub fn sticky_ads(document: &str) -> u32 {
    RE_OPEN_TAG
        .find_iter(document)
        .map(|m| m.as_str())
        .filter(|tag| RE_STICKY.is_match(tag) && RE_AD_MARKER.is_match(tag))
        .count() as u32
}

pub fn ad_signals(document: &str) -> AdSignals {
    AdSignals {
        ad_types: ad_type_counts(document),
        above_fold_ads: above_fold_ads(document),
        sticky_ads: sticky_ads(document),
        autoplay_media: RE_AUTOPLAY.find_iter(document).count() as u32,
    }
}
