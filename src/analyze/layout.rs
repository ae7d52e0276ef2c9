use super::{capped, non_negative};
use crate::types::breakdown::{Breakdown, LayoutBreakdown};
use crate::types::config::LayoutThresholds;
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::LayoutSignals;

pub const BASE_SCORE: Score = 40.0;
pub const VIEWPORT_POINTS: Score = 10.0;
pub const HANDHELD_POINTS: Score = 5.0;
pub const TOUCH_POINTS: Score = 5.0;
pub const HTTPS_POINTS: Score = 10.0;
pub const SINGLE_H1_POINTS: Score = 5.0;
pub const WHITESPACE_CAP: Score = 15.0;
pub const TYPOGRAPHY_CAP: Score = 10.0;
pub const CONTRAST_CAP: Score = 5.0;

fn whitespace_score(layout: &LayoutSignals, thresholds: &LayoutThresholds) -> Score {
    if layout.paragraph_count == 0 {
        return 0.0;
    }
    let avg = non_negative("avg_paragraph_words", layout.avg_paragraph_words);
    let ideal = thresholds.ideal_paragraph_words;
    let worst = thresholds.max_paragraph_words;
    if avg <= ideal {
        WHITESPACE_CAP
    } else if avg >= worst {
        0.0
    } else {
        capped(WHITESPACE_CAP, WHITESPACE_CAP * (worst - avg) / (worst - ideal))
    }
}

fn typography_score(layout: &LayoutSignals, thresholds: &LayoutThresholds) -> Score {
    let families = f64::from(layout.font_family_count);
    let ideal = thresholds.ideal_font_families;
    if ideal.contains(families) {
        TYPOGRAPHY_CAP
    } else if layout.font_family_count == 0 || families <= ideal.max + 1.0 {
        TYPOGRAPHY_CAP / 2.0
    } else {
        0.0
    }
}

pub fn layout_score(
    signals: Option<&LayoutSignals>,
    thresholds: &LayoutThresholds,
) -> CriterionScore {
    let Some(layout) = signals else {
        return CriterionScore::unavailable(Criterion::LayoutQuality);
    };

    let viewport_score = if layout.has_viewport { VIEWPORT_POINTS } else { 0.0 };
    let handheld_score = if layout.handheld_friendly { HANDHELD_POINTS } else { 0.0 };
    let touch_score = if layout.touch_optimized { TOUCH_POINTS } else { 0.0 };
    let security_score = if layout.is_https { HTTPS_POINTS } else { 0.0 };
    let h1_score = if layout.h1_count == 1 { SINGLE_H1_POINTS } else { 0.0 };
    let whitespace_score = whitespace_score(layout, thresholds);
    let typography_score = typography_score(layout, thresholds);
    let color_contrast_score = capped(
        CONTRAST_CAP,
        CONTRAST_CAP - f64::from(layout.light_text_styles),
    );

    let final_score = clamp_score(
        BASE_SCORE
            + viewport_score
            + handheld_score
            + touch_score
            + security_score
            + h1_score
            + whitespace_score
            + typography_score
            + color_contrast_score,
    );
    let breakdown = LayoutBreakdown {
        base_score: BASE_SCORE,
        has_viewport: layout.has_viewport,
        handheld_friendly: layout.handheld_friendly,
        touch_optimized: layout.touch_optimized,
        has_https: layout.is_https,
        h1_count: layout.h1_count,
        viewport_score,
        mobile_score: handheld_score + touch_score,
        security_score,
        h1_score,
        whitespace_score,
        typography_score,
        color_contrast_score,
        final_score,
    };
    CriterionScore::new(
        Criterion::LayoutQuality,
        final_score,
        Breakdown::LayoutQuality(breakdown),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(score: &CriterionScore) -> LayoutBreakdown {
        match &score.breakdown {
            Breakdown::LayoutQuality(b) => *b,
            other => panic!("unexpected breakdown: {other:?}"),
        }
    }

    fn polished() -> LayoutSignals {
        LayoutSignals {
            has_viewport: true,
            handheld_friendly: true,
            touch_optimized: true,
            is_https: true,
            h1_count: 1,
            paragraph_count: 12,
            avg_paragraph_words: 60.0,
            font_family_count: 2,
            light_text_styles: 0,
        }
    }

    #[test]
    fn fully_polished_layout_is_clamped_to_one_hundred() {
        let score = layout_score(Some(&polished()), &LayoutThresholds::default());
        let b = breakdown(&score);
        assert_eq!(b.mobile_score, 10.0);
        assert_eq!(b.whitespace_score, WHITESPACE_CAP);
        assert_eq!(b.typography_score, TYPOGRAPHY_CAP);
        assert_eq!(b.color_contrast_score, CONTRAST_CAP);
        assert_eq!(score.raw_score, 100.0);
    }

    #[test]
    fn bare_document_keeps_base_score() {
        let signals = LayoutSignals::default();
        let score = layout_score(Some(&signals), &LayoutThresholds::default());
        let b = breakdown(&score);
        assert_eq!(b.whitespace_score, 0.0);
        assert_eq!(b.typography_score, TYPOGRAPHY_CAP / 2.0);
        assert_eq!(b.color_contrast_score, CONTRAST_CAP);
        assert!((score.raw_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn multiple_h1_and_dense_paragraphs_lose_points() {
        let signals = LayoutSignals {
            h1_count: 3,
            avg_paragraph_words: 190.0,
            font_family_count: 7,
            light_text_styles: 9,
            ..polished()
        };
        let score = layout_score(Some(&signals), &LayoutThresholds::default());
        let b = breakdown(&score);
        assert_eq!(b.h1_score, 0.0);
        assert!((b.whitespace_score - 7.5).abs() < 1e-9);
        assert_eq!(b.typography_score, 0.0);
        assert_eq!(b.color_contrast_score, 0.0);
        assert!((score.raw_score - 77.5).abs() < 1e-9);
    }

    #[test]
    fn missing_document_scores_zero() {
        assert_eq!(
            layout_score(None, &LayoutThresholds::default()).raw_score,
            0.0
        );
    }
}
