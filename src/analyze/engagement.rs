use super::capped;
use crate::types::breakdown::{Breakdown, EngagementBreakdown};
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::EngagementSignals;

pub const NEUTRAL_SENTIMENT: Score = 50.0;
pub const POINTS_PER_SENTIMENT_WORD: Score = 3.0;
pub const INTERACTION_CAP: Score = 30.0;
pub const SKIMMING_CAP: Score = 40.0;

pub fn engagement_score(signals: Option<&EngagementSignals>) -> CriterionScore {
    let Some(engagement) = signals else {
        return CriterionScore::unavailable(Criterion::Engagement);
    };

    let balance = f64::from(engagement.positive_words) - f64::from(engagement.negative_words);
    let sentiment_score = clamp_score(NEUTRAL_SENTIMENT + balance * POINTS_PER_SENTIMENT_WORD);
    let interaction_score = capped(
        INTERACTION_CAP,
        f64::from(engagement.questions) * 2.0
            + f64::from(engagement.exclamations) * 1.5
            + f64::from(engagement.cta_words) * 2.0,
    );
    let skimming_score = capped(
        SKIMMING_CAP,
        f64::from(engagement.subheading_count) * 3.0
            + f64::from(engagement.list_count) * 4.0
            + f64::from(engagement.emphasis_count),
    );

    let final_score = clamp_score(sentiment_score + interaction_score + skimming_score);
    let breakdown = EngagementBreakdown {
        positive_words: engagement.positive_words,
        negative_words: engagement.negative_words,
        questions: engagement.questions,
        exclamations: engagement.exclamations,
        cta_words: engagement.cta_words,
        sentiment_score,
        interaction_score,
        skimming_score,
        final_score,
    };
    CriterionScore::new(
        Criterion::Engagement,
        final_score,
        Breakdown::Engagement(breakdown),
    )
}
