use super::{capped, non_negative};
use crate::types::breakdown::{Breakdown, UniquenessBreakdown};
use crate::types::config::UniquenessThresholds;
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::UniquenessSignals;

pub const BASE_SCORE: Score = 40.0;
pub const RESEARCH_CAP: Score = 20.0;
pub const FIRST_PERSON_CAP: Score = 15.0;
pub const UNIQUE_RATIO_CAP: Score = 15.0;
pub const PRIMARY_RESEARCH_CAP: Score = 10.0;

/// Full bonus inside the ideal band, linear down to zero at ratio 0 and 1.
fn unique_ratio_bonus(ratio: f64, thresholds: &UniquenessThresholds) -> Score {
    let ideal = thresholds.ideal_unique_ratio;
    let ratio = ratio.min(1.0);
    let bonus = if ideal.contains(ratio) {
        UNIQUE_RATIO_CAP
    } else if ratio < ideal.min {
        UNIQUE_RATIO_CAP * ratio / ideal.min
    } else if ideal.max < 1.0 {
        UNIQUE_RATIO_CAP * (1.0 - (ratio - ideal.max) / (1.0 - ideal.max))
    } else {
        UNIQUE_RATIO_CAP
    };
    capped(UNIQUE_RATIO_CAP, bonus)
}

pub fn uniqueness_score(
    signals: Option<&UniquenessSignals>,
    thresholds: &UniquenessThresholds,
) -> CriterionScore {
    let Some(uniqueness) = signals else {
        return CriterionScore::unavailable(Criterion::Uniqueness);
    };

    let unique_word_ratio = non_negative("unique_word_ratio", uniqueness.unique_word_ratio);
    let research_bonus = capped(RESEARCH_CAP, f64::from(uniqueness.research_words) * 3.0);
    let first_person_bonus = capped(
        FIRST_PERSON_CAP,
        f64::from(uniqueness.first_person_words) * 0.8,
    );
    let uniqueness_bonus = unique_ratio_bonus(unique_word_ratio, thresholds);
    let primary_research_bonus = capped(
        PRIMARY_RESEARCH_CAP,
        f64::from(uniqueness.primary_research_words) * 2.0,
    );

    let final_score = clamp_score(
        BASE_SCORE + research_bonus + first_person_bonus + uniqueness_bonus + primary_research_bonus,
    );
    let breakdown = UniquenessBreakdown {
        research_words: uniqueness.research_words,
        first_person_words: uniqueness.first_person_words,
        unique_word_ratio,
        primary_research_words: uniqueness.primary_research_words,
        base_score: BASE_SCORE,
        research_bonus,
        first_person_bonus,
        uniqueness_bonus,
        primary_research_bonus,
        final_score,
    };
    CriterionScore::new(
        Criterion::Uniqueness,
        final_score,
        Breakdown::Uniqueness(breakdown),
    )
}
