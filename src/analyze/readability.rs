use super::non_negative;
use crate::types::breakdown::{Breakdown, FormulaReading, ReadabilityBreakdown};
use crate::types::config::{IdealRange, ReadabilityThresholds};
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::ReadabilitySignals;

/// Maps a grade-level reading onto 0-100: 100 at or below the ideal band's
/// lower edge, 90 inside the band, then linear down to 0 at `hard_ceiling`.
pub fn normalize_grade(value: f64, ideal: IdealRange, hard_ceiling: f64) -> Score {
    if value <= ideal.min {
        return 100.0;
    }
    if value <= ideal.max {
        return 90.0;
    }
    if value >= hard_ceiling {
        return 0.0;
    }
    clamp_score(90.0 * (1.0 - (value - ideal.max) / (hard_ceiling - ideal.max)))
}

fn grade_normalizer(ideal: IdealRange, hard_ceiling: f64) -> impl Fn(f64) -> Score {
    move |value| normalize_grade(value, ideal, hard_ceiling)
}

fn reading(
    name: &'static str,
    value: Option<f64>,
    normalize: impl Fn(f64) -> Score,
) -> Option<FormulaReading> {
    value.map(|raw| {
        // A present but malformed reading scores zero rather than vanishing.
        if raw.is_finite() {
            FormulaReading {
                value: raw,
                normalized: normalize(raw),
            }
        } else {
            FormulaReading {
                value: non_negative(name, raw),
                normalized: 0.0,
            }
        }
    })
}

pub fn readability_score(
    signals: &ReadabilitySignals,
    thresholds: &ReadabilityThresholds,
) -> CriterionScore {
    let ceiling = thresholds.hard_grade_ceiling;
    let grade = |range: IdealRange| grade_normalizer(range, ceiling);

    let flesch_reading_ease = reading(
        "flesch_reading_ease",
        signals.flesch_reading_ease,
        clamp_score,
    );
    let flesch_kincaid_grade = reading(
        "flesch_kincaid_grade",
        signals.flesch_kincaid_grade,
        grade(thresholds.flesch_kincaid_grade),
    );
    let gunning_fog = reading("gunning_fog", signals.gunning_fog, grade(thresholds.gunning_fog));
    let smog_index = reading("smog_index", signals.smog_index, grade(thresholds.smog_index));
    let automated_readability = reading(
        "automated_readability",
        signals.automated_readability,
        grade(thresholds.automated_readability),
    );
    let coleman_liau = reading(
        "coleman_liau",
        signals.coleman_liau,
        grade(thresholds.coleman_liau),
    );

    let available = [
        flesch_reading_ease,
        flesch_kincaid_grade,
        gunning_fog,
        smog_index,
        automated_readability,
        coleman_liau,
    ]
    .into_iter()
    .flatten()
    .map(|reading| reading.normalized)
    .collect::<Vec<_>>();

    let metrics_used = available.len() as u32;
    let no_data = available.is_empty();
    let final_score = if no_data {
        0.0
    } else {
        clamp_score(available.iter().sum::<f64>() / available.len() as f64)
    };

    let breakdown = ReadabilityBreakdown {
        flesch_reading_ease,
        flesch_kincaid_grade,
        gunning_fog,
        smog_index,
        automated_readability,
        coleman_liau,
        metrics_used,
        no_data,
        final_score,
    };
    CriterionScore::new(
        Criterion::Readability,
        final_score,
        Breakdown::Readability(breakdown),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(score: &CriterionScore) -> ReadabilityBreakdown {
        match &score.breakdown {
            Breakdown::Readability(b) => *b,
            other => panic!("unexpected breakdown: {other:?}"),
        }
    }

    #[test]
    fn normalize_grade_follows_band_shape() {
        let band = IdealRange::new(6.0, 8.0);
        assert_eq!(normalize_grade(4.0, band, 20.0), 100.0);
        assert_eq!(normalize_grade(6.0, band, 20.0), 100.0);
        assert_eq!(normalize_grade(7.5, band, 20.0), 90.0);
        assert!((normalize_grade(14.0, band, 20.0) - 45.0).abs() < 1e-9);
        assert_eq!(normalize_grade(20.0, band, 20.0), 0.0);
        assert_eq!(normalize_grade(35.0, band, 20.0), 0.0);
    }

    #[test]
    fn no_formulas_means_zero_with_no_data_marker() {
        let score = readability_score(
            &ReadabilitySignals::default(),
            &ReadabilityThresholds::default(),
        );
        let b = breakdown(&score);
        assert_eq!(score.raw_score, 0.0);
        assert_eq!(b.metrics_used, 0);
        assert!(b.no_data);
    }

    #[test]
    fn absent_formulas_are_excluded_from_the_average() {
        let signals = ReadabilitySignals {
            flesch_reading_ease: Some(70.0),
            gunning_fog: Some(10.0),
            ..ReadabilitySignals::default()
        };
        let score = readability_score(&signals, &ReadabilityThresholds::default());
        let b = breakdown(&score);
        assert_eq!(b.metrics_used, 2);
        assert!(!b.no_data);
        assert!((score.raw_score - 80.0).abs() < 1e-9);
    }

    #[test]
    fn present_zero_reading_is_averaged_in() {
        let signals = ReadabilitySignals {
            flesch_reading_ease: Some(0.0),
            smog_index: Some(9.0),
            ..ReadabilitySignals::default()
        };
        let score = readability_score(&signals, &ReadabilityThresholds::default());
        assert_eq!(breakdown(&score).metrics_used, 2);
        assert!((score.raw_score - 45.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_and_non_numeric_readings_stay_bounded() {
        let signals = ReadabilitySignals {
            flesch_reading_ease: Some(-45.0),
            flesch_kincaid_grade: Some(f64::NAN),
            gunning_fog: Some(f64::INFINITY),
            smog_index: Some(120.0),
            automated_readability: Some(-3.0),
            coleman_liau: Some(140.0),
        };
        let score = readability_score(&signals, &ReadabilityThresholds::default());
        let b = breakdown(&score);
        assert_eq!(b.metrics_used, 6);
        assert!((0.0..=100.0).contains(&score.raw_score));
        for (_, reading) in b.readings() {
            let reading = reading.expect("every formula was supplied");
            assert!((0.0..=100.0).contains(&reading.normalized));
        }
    }

    #[test]
    fn non_numeric_grade_reading_scores_zero() {
        let signals = ReadabilitySignals {
            flesch_kincaid_grade: Some(f64::NAN),
            gunning_fog: Some(f64::NEG_INFINITY),
            smog_index: Some(7.0),
            ..ReadabilitySignals::default()
        };
        let score = readability_score(&signals, &ReadabilityThresholds::default());
        let b = breakdown(&score);
        let grade = b.flesch_kincaid_grade.expect("grade reading kept");
        assert_eq!(grade.value, 0.0);
        assert_eq!(grade.normalized, 0.0);
        assert_eq!(b.gunning_fog.expect("fog reading kept").normalized, 0.0);
        assert_eq!(b.metrics_used, 3);
        assert!((score.raw_score - 100.0 / 3.0).abs() < 1e-9);
    }
}
