use super::{capped, non_negative};
use crate::types::breakdown::{Breakdown, InformativenessBreakdown};
use crate::types::config::InformativenessThresholds;
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::ContentSignals;

pub const DEPTH_CAP: Score = 30.0;
pub const STRUCTURE_CAP: Score = 25.0;
pub const MEDIA_CAP: Score = 20.0;
pub const CITATION_CAP: Score = 25.0;

pub fn informativeness_score(
    signals: Option<&ContentSignals>,
    thresholds: &InformativenessThresholds,
) -> CriterionScore {
    let Some(content) = signals else {
        return CriterionScore::unavailable(Criterion::Informativeness);
    };

    let words_per_point = non_negative("words_per_depth_point", thresholds.words_per_depth_point);
    let depth_score = if words_per_point > 0.0 {
        capped(DEPTH_CAP, f64::from(content.word_count) / words_per_point)
    } else {
        0.0
    };
    let structure_score = capped(
        STRUCTURE_CAP,
        f64::from(content.header_count) * thresholds.points_per_header,
    );
    let media_score = capped(
        MEDIA_CAP,
        (f64::from(content.image_count) + f64::from(content.link_count))
            * thresholds.points_per_media_item,
    );
    let citation_score = capped(
        CITATION_CAP,
        f64::from(content.citation_count) * thresholds.points_per_citation,
    );

    let final_score = clamp_score(depth_score + structure_score + media_score + citation_score);
    let breakdown = InformativenessBreakdown {
        word_count: content.word_count,
        header_count: content.header_count,
        image_count: content.image_count,
        link_count: content.link_count,
        citation_count: content.citation_count,
        depth_score,
        structure_score,
        media_score,
        citation_score,
        final_score,
    };
    CriterionScore::new(
        Criterion::Informativeness,
        final_score,
        Breakdown::Informativeness(breakdown),
    )
}
