//! Fixed-schema breakdown records, one per criterion.
//!
//! Field names are serialized verbatim and are the stable keys the
//! recommendation engine and the report renderers read.

use crate::types::scoring::Score;
use crate::types::signals::{AdTypeCounts, SocialPlatform};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Breakdown {
    Informativeness(InformativenessBreakdown),
    Readability(ReadabilityBreakdown),
    Engagement(EngagementBreakdown),
    Uniqueness(UniquenessBreakdown),
    LayoutQuality(LayoutBreakdown),
    Discoverability(DiscoverabilityBreakdown),
    SeoKeywords(SeoBreakdown),
    AdExperience(AdBreakdown),
    SocialIntegration(SocialBreakdown),
    Unavailable(UnavailableBreakdown),
}

impl Breakdown {
    pub fn unavailable() -> Self {
        Self::Unavailable(UnavailableBreakdown { final_score: 0.0 })
    }

    pub fn final_score(&self) -> Score {
        match self {
            Self::Informativeness(b) => b.final_score,
            Self::Readability(b) => b.final_score,
            Self::Engagement(b) => b.final_score,
            Self::Uniqueness(b) => b.final_score,
            Self::LayoutQuality(b) => b.final_score,
            Self::Discoverability(b) => b.final_score,
            Self::SeoKeywords(b) => b.final_score,
            Self::AdExperience(b) => b.final_score,
            Self::SocialIntegration(b) => b.final_score,
            Self::Unavailable(b) => b.final_score,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnavailableBreakdown {
    pub final_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InformativenessBreakdown {
    pub word_count: u32,
    pub header_count: u32,
    pub image_count: u32,
    pub link_count: u32,
    pub citation_count: u32,
    pub depth_score: Score,
    pub structure_score: Score,
    pub media_score: Score,
    pub citation_score: Score,
    pub final_score: Score,
}

/// A single readability formula: the raw reading and its 0-100 normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaReading {
    pub value: f64,
    pub normalized: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadabilityBreakdown {
    pub flesch_reading_ease: Option<FormulaReading>,
    pub flesch_kincaid_grade: Option<FormulaReading>,
    pub gunning_fog: Option<FormulaReading>,
    pub smog_index: Option<FormulaReading>,
    pub automated_readability: Option<FormulaReading>,
    pub coleman_liau: Option<FormulaReading>,
    pub metrics_used: u32,
    pub no_data: bool,
    pub final_score: Score,
}

impl ReadabilityBreakdown {
    pub fn readings(&self) -> [(&'static str, Option<FormulaReading>); 6] {
        [
            ("Flesch Reading Ease", self.flesch_reading_ease),
            ("Flesch-Kincaid grade", self.flesch_kincaid_grade),
            ("Gunning Fog index", self.gunning_fog),
            ("SMOG index", self.smog_index),
            ("Automated Readability Index", self.automated_readability),
            ("Coleman-Liau index", self.coleman_liau),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngagementBreakdown {
    pub positive_words: u32,
    pub negative_words: u32,
    pub questions: u32,
    pub exclamations: u32,
    pub cta_words: u32,
    pub sentiment_score: Score,
    pub interaction_score: Score,
    pub skimming_score: Score,
    pub final_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UniquenessBreakdown {
    pub research_words: u32,
    pub first_person_words: u32,
    pub unique_word_ratio: f64,
    pub primary_research_words: u32,
    pub base_score: Score,
    pub research_bonus: Score,
    pub first_person_bonus: Score,
    pub uniqueness_bonus: Score,
    pub primary_research_bonus: Score,
    pub final_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutBreakdown {
    pub base_score: Score,
    pub has_viewport: bool,
    pub handheld_friendly: bool,
    pub touch_optimized: bool,
    pub has_https: bool,
    pub h1_count: u32,
    pub viewport_score: Score,
    pub mobile_score: Score,
    pub security_score: Score,
    pub h1_score: Score,
    pub whitespace_score: Score,
    pub typography_score: Score,
    pub color_contrast_score: Score,
    pub final_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscoverabilityBreakdown {
    pub has_search: bool,
    pub nav_count: u32,
    pub has_breadcrumbs: bool,
    pub has_sitemap: bool,
    pub featured_posts: u32,
    pub category_links: u32,
    pub search_score: Score,
    pub navigation_score: Score,
    pub breadcrumb_score: Score,
    pub sitemap_score: Score,
    pub featured_score: Score,
    pub category_score: Score,
    pub final_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeoBreakdown {
    pub has_title: bool,
    pub title_length: u32,
    pub title_optimal: bool,
    pub has_meta_desc: bool,
    pub meta_desc_length: u32,
    pub meta_desc_optimal: bool,
    pub h1_count: u32,
    pub h1_optimal: bool,
    pub is_indexed: bool,
    pub schema_markup_count: u32,
    pub keyword_density: f64,
    pub internal_links: u32,
    pub days_since_published: Option<u32>,
    pub title_score: Score,
    pub meta_desc_score: Score,
    pub h1_score: Score,
    pub indexing_score: Score,
    pub schema_score: Score,
    pub keyword_score: Score,
    pub linking_score: Score,
    pub freshness_score: Score,
    pub url_score: Score,
    pub final_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdBreakdown {
    pub ad_types: AdTypeCounts,
    pub ad_indicator_count: u32,
    pub ad_density_penalty: Score,
    pub placement_penalty: Score,
    pub autoplay_penalty: Score,
    pub final_score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialBreakdown {
    pub platforms_found: Vec<SocialPlatform>,
    pub platform_count: u32,
    pub sharing_buttons: u32,
    pub share_counts: u32,
    pub follower_counts: u32,
    pub testimonials: u32,
    pub platform_score: Score,
    pub sharing_score: Score,
    pub social_proof_score: Score,
    pub final_score: Score,
}
