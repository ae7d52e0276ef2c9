use super::{capped, non_negative};
use crate::types::breakdown::{Breakdown, SeoBreakdown};
use crate::types::config::{IdealRange, SeoThresholds};
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::{SeoSignals, UrlSignals};

pub const TITLE_POINTS: Score = 10.0;
pub const META_DESCRIPTION_POINTS: Score = 10.0;
pub const SINGLE_H1_POINTS: Score = 5.0;
pub const INDEXED_POINTS: Score = 10.0;
pub const SCHEMA_CAP: Score = 10.0;
pub const KEYWORD_CAP: Score = 30.0;
pub const LINKING_CAP: Score = 20.0;
pub const FRESHNESS_CAP: Score = 10.0;
pub const URL_CAP: Score = 10.0;

fn in_range(length: Option<u32>, range: IdealRange) -> bool {
    length.is_some_and(|length| range.contains(f64::from(length)))
}

/// Full marks inside the ideal density band; under-use scales up linearly,
/// over-use decays to zero at the stuffing ceiling.
pub fn keyword_score(density: f64, thresholds: &SeoThresholds) -> Score {
    let ideal = thresholds.keyword_density;
    let ceiling = thresholds.keyword_density_ceiling;
    if ideal.contains(density) {
        KEYWORD_CAP
    } else if density < ideal.min {
        capped(KEYWORD_CAP, KEYWORD_CAP * density / ideal.min)
    } else if density >= ceiling {
        0.0
    } else {
        capped(
            KEYWORD_CAP,
            KEYWORD_CAP * (ceiling - density) / (ceiling - ideal.max),
        )
    }
}

pub fn freshness_score(days_since_published: Option<u32>) -> Score {
    match days_since_published {
        None => 0.0,
        Some(days) if days <= 180 => FRESHNESS_CAP,
        Some(days) if days <= 365 => 7.0,
        Some(days) if days <= 730 => 4.0,
        Some(_) => 1.0,
    }
}

pub fn url_score(url: Option<&UrlSignals>, thresholds: &SeoThresholds) -> Score {
    let Some(url) = url else {
        return 0.0;
    };
    let checks = [
        url.is_https,
        url.length <= thresholds.max_url_length,
        !url.has_query,
        url.depth <= thresholds.max_url_depth,
        url.readable_slug,
    ];
    let passed = checks.iter().filter(|check| **check).count() as f64;
    capped(URL_CAP, passed * 2.0)
}

pub fn seo_score(signals: Option<&SeoSignals>, thresholds: &SeoThresholds) -> CriterionScore {
    let Some(seo) = signals else {
        return CriterionScore::unavailable(Criterion::SeoKeywords);
    };

    let title_optimal = in_range(seo.title_length, thresholds.title_length);
    let meta_desc_optimal = in_range(
        seo.meta_description_length,
        thresholds.meta_description_length,
    );
    let h1_optimal = seo.h1_count == 1;
    let keyword_density = non_negative("keyword_density", seo.keyword_density);

    let title_score = if title_optimal { TITLE_POINTS } else { 0.0 };
    let meta_desc_score = if meta_desc_optimal {
        META_DESCRIPTION_POINTS
    } else {
        0.0
    };
    let h1_score = if h1_optimal { SINGLE_H1_POINTS } else { 0.0 };
    let indexing_score = if seo.is_indexed { INDEXED_POINTS } else { 0.0 };
    let schema_score = capped(SCHEMA_CAP, f64::from(seo.schema_markup_count) * 3.0);
    let keyword_score = keyword_score(keyword_density, thresholds);
    let linking_score = capped(LINKING_CAP, f64::from(seo.internal_links) * 2.0);
    let freshness_score = freshness_score(seo.days_since_published);
    let url_score = url_score(seo.url.as_ref(), thresholds);

    let final_score = clamp_score(
        title_score
            + meta_desc_score
            + h1_score
            + indexing_score
            + schema_score
            + keyword_score
            + linking_score
            + freshness_score
            + url_score,
    );
    let breakdown = SeoBreakdown {
        has_title: seo.title_length.is_some(),
        title_length: seo.title_length.unwrap_or(0),
        title_optimal,
        has_meta_desc: seo.meta_description_length.is_some(),
        meta_desc_length: seo.meta_description_length.unwrap_or(0),
        meta_desc_optimal,
        h1_count: seo.h1_count,
        h1_optimal,
        is_indexed: seo.is_indexed,
        schema_markup_count: seo.schema_markup_count,
        keyword_density,
        internal_links: seo.internal_links,
        days_since_published: seo.days_since_published,
        title_score,
        meta_desc_score,
        h1_score,
        indexing_score,
        schema_score,
        keyword_score,
        linking_score,
        freshness_score,
        url_score,
        final_score,
    };
    CriterionScore::new(
        Criterion::SeoKeywords,
        final_score,
        Breakdown::SeoKeywords(breakdown),
    )
}
