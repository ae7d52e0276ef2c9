pub mod ads;
pub mod discoverability;
pub mod engagement;
pub mod informativeness;
pub mod layout;
pub mod readability;
pub mod recommend;
pub mod seo;
pub mod social;
pub mod uniqueness;

use crate::error::Result;
use crate::types::config::{PageScoreConfig, Thresholds};
use crate::types::report::AnalysisResult;
use crate::types::scoring::{ScoreBoard, WeightTable};
use crate::types::signals::PageSignals;
use std::collections::BTreeMap;

/// Caps a sub-score to `[0, cap]`.
pub(crate) fn capped(cap: f64, value: f64) -> f64 {
    value.max(0.0).min(cap)
}

/// Treats negative or non-finite measurements as zero.
pub(crate) fn non_negative(name: &'static str, value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        tracing::warn!(signal = name, value, "invalid signal value treated as zero");
        0.0
    }
}

/// Immutable scoring setup shared across analyses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    weights: WeightTable,
    thresholds: Thresholds,
}

impl Engine {
    pub fn new(weights: WeightTable, thresholds: Thresholds) -> Self {
        Self {
            weights,
            thresholds,
        }
    }

    pub fn from_config(config: &PageScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.weight_table()?, config.thresholds))
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn score_board(&self, signals: &PageSignals) -> ScoreBoard {
        let thresholds = &self.thresholds;
        ScoreBoard {
            informativeness: informativeness::informativeness_score(
                signals.content.as_ref(),
                &thresholds.informativeness,
            ),
            readability: readability::readability_score(
                &signals.readability,
                &thresholds.readability,
            ),
            engagement: engagement::engagement_score(signals.engagement.as_ref()),
            uniqueness: uniqueness::uniqueness_score(
                signals.uniqueness.as_ref(),
                &thresholds.uniqueness,
            ),
            layout_quality: layout::layout_score(signals.layout.as_ref(), &thresholds.layout_quality),
            discoverability: discoverability::discoverability_score(
                signals.discovery.as_ref(),
                &thresholds.discoverability,
            ),
            seo_keywords: seo::seo_score(signals.seo.as_ref(), &thresholds.seo_keywords),
            ad_experience: ads::ad_experience_score(
                signals.ads.as_ref(),
                &thresholds.ad_experience,
            ),
            social_integration: social::social_score(signals.social.as_ref()),
        }
    }
}

pub fn analyze(signals: &PageSignals, engine: &Engine) -> AnalysisResult {
    let board = engine.score_board(signals);
    for score in board.iter() {
        tracing::debug!(
            criterion = score.criterion.as_str(),
            score = score.raw_score,
            unavailable = score.breakdown.is_unavailable(),
            "criterion scored"
        );
    }

    let aggregate = board.finalize(engine.weights());
    let recommendations = recommend::recommendations(&board, engine.thresholds());

    let scores = board
        .iter()
        .map(|score| (score.criterion, score.raw_score))
        .collect::<BTreeMap<_, _>>();
    let score_breakdowns = board
        .iter()
        .map(|score| (score.criterion, score.breakdown.clone()))
        .collect::<BTreeMap<_, _>>();

    tracing::info!(
        overall = aggregate.overall,
        recommendations = recommendations.len(),
        "page analyzed"
    );

    AnalysisResult {
        overall_score: aggregate.overall,
        scores,
        score_breakdowns,
        contributions: aggregate.contributions,
        recommendations,
    }
}
