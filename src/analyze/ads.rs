use super::capped;
use crate::types::breakdown::{AdBreakdown, Breakdown};
use crate::types::config::AdThresholds;
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score, MAX_SCORE};
use crate::types::signals::AdSignals;

pub const ABOVE_FOLD_PENALTY: Score = 5.0;
pub const STICKY_PENALTY: Score = 10.0;

pub fn placement_penalty(ads: &AdSignals, thresholds: &AdThresholds) -> Score {
    capped(
        thresholds.max_placement_penalty,
        f64::from(ads.above_fold_ads) * ABOVE_FOLD_PENALTY
            + f64::from(ads.sticky_ads) * STICKY_PENALTY,
    )
}

/// Starts from a clean 100 and subtracts density, placement and autoplay
/// penalties. A page with no document scores 0 like every other criterion.
pub fn ad_experience_score(
    signals: Option<&AdSignals>,
    thresholds: &AdThresholds,
) -> CriterionScore {
    let Some(ads) = signals else {
        return CriterionScore::unavailable(Criterion::AdExperience);
    };

    let ad_indicator_count = ads.ad_types.total();
    let ad_density_penalty = f64::from(ad_indicator_count) * thresholds.penalty_per_ad;
    let placement_penalty = placement_penalty(ads, thresholds);
    let autoplay_penalty = f64::from(ads.autoplay_media) * thresholds.penalty_per_autoplay;

    let final_score =
        clamp_score(MAX_SCORE - ad_density_penalty - placement_penalty - autoplay_penalty);
    let breakdown = AdBreakdown {
        ad_types: ads.ad_types,
        ad_indicator_count,
        ad_density_penalty,
        placement_penalty,
        autoplay_penalty,
        final_score,
    };
    CriterionScore::new(
        Criterion::AdExperience,
        final_score,
        Breakdown::AdExperience(breakdown),
    )
}
