use super::capped;
use crate::types::breakdown::{Breakdown, DiscoverabilityBreakdown};
use crate::types::config::DiscoverabilityThresholds;
use crate::types::scoring::{clamp_score, Criterion, CriterionScore, Score};
use crate::types::signals::DiscoverySignals;

pub const SEARCH_POINTS: Score = 15.0;
pub const NO_SEARCH_POINTS: Score = 5.0;
pub const NAVIGATION_CAP: Score = 20.0;
pub const NAVIGATION_STEP: Score = 5.0;
pub const BREADCRUMB_POINTS: Score = 15.0;
pub const SITEMAP_POINTS: Score = 10.0;
pub const FEATURED_CAP: Score = 15.0;
pub const CATEGORY_CAP: Score = 25.0;

/// Full marks inside the ideal nav band, minus a step per nav element away from it.
fn navigation_score(nav_count: u32, thresholds: &DiscoverabilityThresholds) -> Score {
    if nav_count == 0 {
        return 0.0;
    }
    let count = f64::from(nav_count);
    let ideal = thresholds.ideal_nav_count;
    let distance = if count < ideal.min {
        ideal.min - count
    } else if count > ideal.max {
        count - ideal.max
    } else {
        0.0
    };
    capped(NAVIGATION_CAP, NAVIGATION_CAP - distance * NAVIGATION_STEP)
}

pub fn discoverability_score(
    signals: Option<&DiscoverySignals>,
    thresholds: &DiscoverabilityThresholds,
) -> CriterionScore {
    let Some(discovery) = signals else {
        return CriterionScore::unavailable(Criterion::Discoverability);
    };

    let search_score = if discovery.has_search {
        SEARCH_POINTS
    } else {
        NO_SEARCH_POINTS
    };
    let navigation_score = navigation_score(discovery.nav_count, thresholds);
    let breadcrumb_score = if discovery.has_breadcrumbs {
        BREADCRUMB_POINTS
    } else {
        0.0
    };
    let sitemap_score = if discovery.has_sitemap { SITEMAP_POINTS } else { 0.0 };
    let featured_score = capped(FEATURED_CAP, f64::from(discovery.featured_posts) * 3.0);
    let category_score = capped(CATEGORY_CAP, f64::from(discovery.category_links) * 2.5);

    let final_score = clamp_score(
        search_score
            + navigation_score
            + breadcrumb_score
            + sitemap_score
            + featured_score
            + category_score,
    );
    let breakdown = DiscoverabilityBreakdown {
        has_search: discovery.has_search,
        nav_count: discovery.nav_count,
        has_breadcrumbs: discovery.has_breadcrumbs,
        has_sitemap: discovery.has_sitemap,
        featured_posts: discovery.featured_posts,
        category_links: discovery.category_links,
        search_score,
        navigation_score,
        breadcrumb_score,
        sitemap_score,
        featured_score,
        category_score,
        final_score,
    };
    CriterionScore::new(
        Criterion::Discoverability,
        final_score,
        Breakdown::Discoverability(breakdown),
    )
}
