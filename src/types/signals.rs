//! Raw page facts consumed by the criterion scorers.
//!
//! A group is `None` when the input it is derived from (rendered document or
//! extracted text) was not available for the page. Readability formulas are
//! individually optional: an absent formula is not the same as a zero reading.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSignals {
    pub content: Option<ContentSignals>,
    pub readability: ReadabilitySignals,
    pub engagement: Option<EngagementSignals>,
    pub uniqueness: Option<UniquenessSignals>,
    pub layout: Option<LayoutSignals>,
    pub discovery: Option<DiscoverySignals>,
    pub seo: Option<SeoSignals>,
    pub ads: Option<AdSignals>,
    pub social: Option<SocialSignals>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSignals {
    pub word_count: u32,
    pub header_count: u32,
    pub image_count: u32,
    pub link_count: u32,
    pub citation_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilitySignals {
    pub flesch_reading_ease: Option<f64>,
    pub flesch_kincaid_grade: Option<f64>,
    pub gunning_fog: Option<f64>,
    pub smog_index: Option<f64>,
    pub automated_readability: Option<f64>,
    pub coleman_liau: Option<f64>,
}

impl ReadabilitySignals {
    pub fn available(&self) -> usize {
        [
            self.flesch_reading_ease,
            self.flesch_kincaid_grade,
            self.gunning_fog,
            self.smog_index,
            self.automated_readability,
            self.coleman_liau,
        ]
        .iter()
        .filter(|value| value.is_some())
        .count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngagementSignals {
    pub positive_words: u32,
    pub negative_words: u32,
    pub questions: u32,
    pub exclamations: u32,
    pub cta_words: u32,
    /// h2-h4 headings that break the body into scannable sections.
    pub subheading_count: u32,
    pub list_count: u32,
    pub emphasis_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquenessSignals {
    pub research_words: u32,
    pub first_person_words: u32,
    pub unique_word_ratio: f64,
    pub primary_research_words: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSignals {
    pub has_viewport: bool,
    pub handheld_friendly: bool,
    pub touch_optimized: bool,
    pub is_https: bool,
    pub h1_count: u32,
    pub paragraph_count: u32,
    pub avg_paragraph_words: f64,
    pub font_family_count: u32,
    /// Inline text colors light enough to fail contrast on a white page.
    pub light_text_styles: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverySignals {
    pub has_search: bool,
    pub nav_count: u32,
    pub has_breadcrumbs: bool,
    pub has_sitemap: bool,
    pub featured_posts: u32,
    pub category_links: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSignals {
    pub title_length: Option<u32>,
    pub meta_description_length: Option<u32>,
    pub h1_count: u32,
    pub is_indexed: bool,
    pub schema_markup_count: u32,
    /// Share of the most frequent content word, in percent.
    pub keyword_density: f64,
    pub internal_links: u32,
    pub external_links: u32,
    pub days_since_published: Option<u32>,
    pub url: Option<UrlSignals>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSignals {
    pub is_https: bool,
    pub length: u32,
    pub has_query: bool,
    pub depth: u32,
    pub readable_slug: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdTypeCounts {
    pub google_ads: u32,
    pub doubleclick: u32,
    pub general: u32,
    pub popups: u32,
    pub containers: u32,
    pub video: u32,
    pub display: u32,
    pub sponsored: u32,
}

impl AdTypeCounts {
    pub fn total(&self) -> u32 {
        self.entries()
            .iter()
            .fold(0u32, |total, (_, count)| total.saturating_add(*count))
    }

    pub fn entries(&self) -> [(&'static str, u32); 8] {
        [
            ("google_ads", self.google_ads),
            ("doubleclick", self.doubleclick),
            ("general", self.general),
            ("popups", self.popups),
            ("containers", self.containers),
            ("video", self.video),
            ("display", self.display),
            ("sponsored", self.sponsored),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdSignals {
    pub ad_types: AdTypeCounts,
    pub above_fold_ads: u32,
    pub sticky_ads: u32,
    pub autoplay_media: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Pinterest,
    Tiktok,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 7] = [
        Self::Facebook,
        Self::Twitter,
        Self::Instagram,
        Self::Linkedin,
        Self::Youtube,
        Self::Pinterest,
        Self::Tiktok,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::Linkedin => "linkedin",
            Self::Youtube => "youtube",
            Self::Pinterest => "pinterest",
            Self::Tiktok => "tiktok",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSignals {
    pub platforms: BTreeSet<SocialPlatform>,
    pub sharing_buttons: u32,
    pub share_counts: u32,
    pub follower_counts: u32,
    pub testimonials: u32,
}
