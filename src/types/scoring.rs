use crate::error::{PageScoreError, Result};
use crate::types::breakdown::Breakdown;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub type Score = f64;

pub const MIN_SCORE: Score = 0.0;
pub const MAX_SCORE: Score = 100.0;
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Clamps a computed score into `[0, 100]`; non-finite values become 0.
pub fn clamp_score(value: f64) -> Score {
    if !value.is_finite() {
        tracing::warn!(value, "non-numeric score replaced with 0");
        return MIN_SCORE;
    }
    value.clamp(MIN_SCORE, MAX_SCORE)
}

/// The nine evaluation dimensions, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Informativeness,
    Readability,
    Engagement,
    Uniqueness,
    LayoutQuality,
    Discoverability,
    SeoKeywords,
    AdExperience,
    SocialIntegration,
}

impl Criterion {
    pub const ALL: [Criterion; 9] = [
        Self::Informativeness,
        Self::Readability,
        Self::Engagement,
        Self::Uniqueness,
        Self::LayoutQuality,
        Self::Discoverability,
        Self::SeoKeywords,
        Self::AdExperience,
        Self::SocialIntegration,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Informativeness => "informativeness",
            Self::Readability => "readability",
            Self::Engagement => "engagement",
            Self::Uniqueness => "uniqueness",
            Self::LayoutQuality => "layout_quality",
            Self::Discoverability => "discoverability",
            Self::SeoKeywords => "seo_keywords",
            Self::AdExperience => "ad_experience",
            Self::SocialIntegration => "social_integration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Informativeness => "Informativeness",
            Self::Readability => "Readability",
            Self::Engagement => "Engagement",
            Self::Uniqueness => "Uniqueness",
            Self::LayoutQuality => "Layout Quality",
            Self::Discoverability => "Discoverability",
            Self::SeoKeywords => "SEO Keywords",
            Self::AdExperience => "Ad Experience",
            Self::SocialIntegration => "Social Integration",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = PageScoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == s)
            .ok_or_else(|| PageScoreError::Configuration(format!("unknown criterion: {s}")))
    }
}

/// Validated, immutable criterion weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    weights: [f64; 9],
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            weights: [0.20, 0.15, 0.15, 0.15, 0.10, 0.10, 0.05, 0.05, 0.05],
        }
    }
}

impl WeightTable {
    /// Builds a table from `criterion -> weight` entries. Every criterion must
    /// be present exactly once, weights must be positive and sum to 1.0.
    pub fn new(entries: &BTreeMap<String, f64>) -> Result<Self> {
        let unknown = entries
            .keys()
            .filter(|key| key.parse::<Criterion>().is_err())
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            return Err(PageScoreError::Configuration(format!(
                "weights contains unknown criterion key(s): {}",
                unknown.join(", ")
            )));
        }

        let missing = Criterion::ALL
            .iter()
            .filter(|criterion| !entries.contains_key(criterion.as_str()))
            .map(|criterion| criterion.as_str())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(PageScoreError::Configuration(format!(
                "weights is missing criterion key(s): {}",
                missing.join(", ")
            )));
        }

        let mut weights = [0.0; 9];
        for criterion in Criterion::ALL {
            let weight = entries[criterion.as_str()];
            if !weight.is_finite() || weight <= 0.0 {
                return Err(PageScoreError::Configuration(format!(
                    "weights.{criterion} must be a positive number (found {weight})"
                )));
            }
            weights[criterion.index()] = weight;
        }

        let table = Self { weights };
        table.check_sum()?;
        Ok(table)
    }

    fn check_sum(&self) -> Result<()> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(PageScoreError::Configuration(format!(
                "weights must sum to 1.0 (found {sum:.3})"
            )));
        }
        Ok(())
    }

    pub fn weight(&self, criterion: Criterion) -> f64 {
        self.weights[criterion.index()]
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL
            .into_iter()
            .map(move |criterion| (criterion, self.weight(criterion)))
    }
}

/// Output of exactly one criterion scorer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub raw_score: Score,
    pub breakdown: Breakdown,
}

impl CriterionScore {
    pub fn new(criterion: Criterion, raw_score: Score, breakdown: Breakdown) -> Self {
        Self {
            criterion,
            raw_score: clamp_score(raw_score),
            breakdown,
        }
    }

    /// Score for a criterion whose input document or text is missing.
    pub fn unavailable(criterion: Criterion) -> Self {
        Self::new(criterion, MIN_SCORE, Breakdown::unavailable())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub raw_score: Score,
    pub weight: f64,
    pub contribution: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub overall: Score,
    pub contributions: BTreeMap<Criterion, Contribution>,
}

/// One fully populated score per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    pub informativeness: CriterionScore,
    pub readability: CriterionScore,
    pub engagement: CriterionScore,
    pub uniqueness: CriterionScore,
    pub layout_quality: CriterionScore,
    pub discoverability: CriterionScore,
    pub seo_keywords: CriterionScore,
    pub ad_experience: CriterionScore,
    pub social_integration: CriterionScore,
}

impl ScoreBoard {
    pub fn get(&self, criterion: Criterion) -> &CriterionScore {
        match criterion {
            Criterion::Informativeness => &self.informativeness,
            Criterion::Readability => &self.readability,
            Criterion::Engagement => &self.engagement,
            Criterion::Uniqueness => &self.uniqueness,
            Criterion::LayoutQuality => &self.layout_quality,
            Criterion::Discoverability => &self.discoverability,
            Criterion::SeoKeywords => &self.seo_keywords,
            Criterion::AdExperience => &self.ad_experience,
            Criterion::SocialIntegration => &self.social_integration,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionScore> + '_ {
        Criterion::ALL.into_iter().map(move |criterion| self.get(criterion))
    }

    /// Weighted overall score plus the per-criterion contributions behind it.
    pub fn finalize(&self, weights: &WeightTable) -> Aggregate {
        let mut contributions = BTreeMap::new();
        let mut overall = 0.0;
        for (criterion, weight) in weights.iter() {
            let raw_score = clamp_score(self.get(criterion).raw_score);
            let contribution = raw_score * weight;
            overall += contribution;
            contributions.insert(
                criterion,
                Contribution {
                    raw_score,
                    weight,
                    contribution,
                },
            );
        }

        Aggregate {
            overall: clamp_score(overall),
            contributions,
        }
    }
}
