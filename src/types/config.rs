use crate::error::PageScoreError;
use crate::types::scoring::WeightTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageScoreConfig {
    pub weights: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Closed numeric interval describing an ideal band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    pub min: f64,
    pub max: f64,
}

impl IdealRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, key: &str) -> Result<(), PageScoreError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min < 0.0 {
            return Err(PageScoreError::ConfigParse(format!(
                "thresholds.{key} bounds must be finite and non-negative"
            )));
        }
        if self.min > self.max {
            return Err(PageScoreError::ConfigParse(format!(
                "thresholds.{key}.min must not exceed max ({} > {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub informativeness: InformativenessThresholds,
    pub readability: ReadabilityThresholds,
    pub uniqueness: UniquenessThresholds,
    pub layout_quality: LayoutThresholds,
    pub discoverability: DiscoverabilityThresholds,
    pub seo_keywords: SeoThresholds,
    pub ad_experience: AdThresholds,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InformativenessThresholds {
    pub words_per_depth_point: f64,
    pub points_per_header: f64,
    pub points_per_media_item: f64,
    pub points_per_citation: f64,
}

impl Default for InformativenessThresholds {
    fn default() -> Self {
        Self {
            words_per_depth_point: 100.0,
            points_per_header: 2.0,
            points_per_media_item: 1.5,
            points_per_citation: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadabilityThresholds {
    pub flesch_kincaid_grade: IdealRange,
    pub gunning_fog: IdealRange,
    pub smog_index: IdealRange,
    pub automated_readability: IdealRange,
    pub coleman_liau: IdealRange,
    /// Grade level at which a formula contributes nothing.
    pub hard_grade_ceiling: f64,
}

impl Default for ReadabilityThresholds {
    fn default() -> Self {
        Self {
            flesch_kincaid_grade: IdealRange::new(6.0, 8.0),
            gunning_fog: IdealRange::new(0.0, 12.0),
            smog_index: IdealRange::new(8.0, 10.0),
            automated_readability: IdealRange::new(6.0, 8.0),
            coleman_liau: IdealRange::new(6.0, 8.0),
            hard_grade_ceiling: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquenessThresholds {
    pub ideal_unique_ratio: IdealRange,
}

impl Default for UniquenessThresholds {
    fn default() -> Self {
        Self {
            ideal_unique_ratio: IdealRange::new(0.4, 0.6),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutThresholds {
    pub ideal_paragraph_words: f64,
    pub max_paragraph_words: f64,
    pub ideal_font_families: IdealRange,
}

impl Default for LayoutThresholds {
    fn default() -> Self {
        Self {
            ideal_paragraph_words: 80.0,
            max_paragraph_words: 300.0,
            ideal_font_families: IdealRange::new(1.0, 3.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverabilityThresholds {
    pub ideal_nav_count: IdealRange,
}

impl Default for DiscoverabilityThresholds {
    fn default() -> Self {
        Self {
            ideal_nav_count: IdealRange::new(2.0, 3.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoThresholds {
    pub title_length: IdealRange,
    pub meta_description_length: IdealRange,
    pub keyword_density: IdealRange,
    /// Density (percent) at which keyword stuffing earns no points.
    pub keyword_density_ceiling: f64,
    pub max_url_length: u32,
    pub max_url_depth: u32,
}

impl Default for SeoThresholds {
    fn default() -> Self {
        Self {
            title_length: IdealRange::new(30.0, 60.0),
            meta_description_length: IdealRange::new(120.0, 160.0),
            keyword_density: IdealRange::new(1.0, 2.0),
            keyword_density_ceiling: 5.0,
            max_url_length: 75,
            max_url_depth: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdThresholds {
    pub penalty_per_ad: f64,
    pub penalty_per_autoplay: f64,
    pub max_placement_penalty: f64,
}

impl Default for AdThresholds {
    fn default() -> Self {
        Self {
            penalty_per_ad: 5.0,
            penalty_per_autoplay: 15.0,
            max_placement_penalty: 30.0,
        }
    }
}

impl PageScoreConfig {
    /// The validated weight table; the built-in table when none is configured.
    pub fn weight_table(&self) -> Result<WeightTable, PageScoreError> {
        match &self.weights {
            Some(weights) => WeightTable::new(weights),
            None => Ok(WeightTable::default()),
        }
    }

    pub fn validate(&self) -> Result<(), PageScoreError> {
        self.weight_table()?;

        let t = &self.thresholds;
        let positive = [
            (
                "informativeness.words_per_depth_point",
                t.informativeness.words_per_depth_point,
            ),
            (
                "readability.hard_grade_ceiling",
                t.readability.hard_grade_ceiling,
            ),
            (
                "layout_quality.max_paragraph_words",
                t.layout_quality.max_paragraph_words,
            ),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PageScoreError::ConfigParse(format!(
                    "thresholds.{key} must be greater than 0"
                )));
            }
        }

        let non_negative = [
            (
                "informativeness.points_per_header",
                t.informativeness.points_per_header,
            ),
            (
                "informativeness.points_per_media_item",
                t.informativeness.points_per_media_item,
            ),
            (
                "informativeness.points_per_citation",
                t.informativeness.points_per_citation,
            ),
            (
                "layout_quality.ideal_paragraph_words",
                t.layout_quality.ideal_paragraph_words,
            ),
            ("ad_experience.penalty_per_ad", t.ad_experience.penalty_per_ad),
            (
                "ad_experience.penalty_per_autoplay",
                t.ad_experience.penalty_per_autoplay,
            ),
            (
                "ad_experience.max_placement_penalty",
                t.ad_experience.max_placement_penalty,
            ),
        ];
        for (key, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PageScoreError::ConfigParse(format!(
                    "thresholds.{key} must be a non-negative number"
                )));
            }
        }

        for (key, range) in [
            (
                "readability.flesch_kincaid_grade",
                t.readability.flesch_kincaid_grade,
            ),
            ("readability.gunning_fog", t.readability.gunning_fog),
            ("readability.smog_index", t.readability.smog_index),
            (
                "readability.automated_readability",
                t.readability.automated_readability,
            ),
            ("readability.coleman_liau", t.readability.coleman_liau),
            (
                "uniqueness.ideal_unique_ratio",
                t.uniqueness.ideal_unique_ratio,
            ),
            (
                "layout_quality.ideal_font_families",
                t.layout_quality.ideal_font_families,
            ),
            (
                "discoverability.ideal_nav_count",
                t.discoverability.ideal_nav_count,
            ),
            ("seo_keywords.title_length", t.seo_keywords.title_length),
            (
                "seo_keywords.meta_description_length",
                t.seo_keywords.meta_description_length,
            ),
            ("seo_keywords.keyword_density", t.seo_keywords.keyword_density),
        ] {
            range.validate(key)?;
        }

        for (key, range) in [
            (
                "readability.flesch_kincaid_grade",
                t.readability.flesch_kincaid_grade,
            ),
            ("readability.gunning_fog", t.readability.gunning_fog),
            ("readability.smog_index", t.readability.smog_index),
            (
                "readability.automated_readability",
                t.readability.automated_readability,
            ),
            ("readability.coleman_liau", t.readability.coleman_liau),
        ] {
            if range.max >= t.readability.hard_grade_ceiling {
                return Err(PageScoreError::ConfigParse(format!(
                    "thresholds.{key}.max must be below readability.hard_grade_ceiling"
                )));
            }
        }

        if t.uniqueness.ideal_unique_ratio.max > 1.0 {
            return Err(PageScoreError::ConfigParse(
                "thresholds.uniqueness.ideal_unique_ratio must lie within 0.0 and 1.0".to_string(),
            ));
        }
        if t.layout_quality.ideal_paragraph_words >= t.layout_quality.max_paragraph_words {
            return Err(PageScoreError::ConfigParse(
                "thresholds.layout_quality.ideal_paragraph_words must be below max_paragraph_words"
                    .to_string(),
            ));
        }
        if t.seo_keywords.keyword_density.max >= t.seo_keywords.keyword_density_ceiling {
            return Err(PageScoreError::ConfigParse(
                "thresholds.seo_keywords.keyword_density.max must be below keyword_density_ceiling"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
