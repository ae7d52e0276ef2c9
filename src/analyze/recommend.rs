//! Maps criterion scores onto prioritized, breakdown-aware advice.
//!
//! Every criterion yields at least one recommendation. Criteria in the
//! EXCELLENT tier get a single affirming message, so the output always covers
//! all nine criteria and callers can group by tier without gaps.

use crate::types::breakdown::Breakdown;
use crate::types::config::{IdealRange, Thresholds};
use crate::types::report::{Priority, Recommendation};
use crate::types::scoring::{CriterionScore, ScoreBoard};

/// Recommendations sorted by severity, ties in criterion declaration order.
pub fn recommendations(board: &ScoreBoard, thresholds: &Thresholds) -> Vec<Recommendation> {
    let mut recommendations = board
        .iter()
        .flat_map(|score| criterion_recommendations(score, thresholds))
        .collect::<Vec<_>>();
    // Stable sort keeps declaration order inside a tier.
    recommendations.sort_by_key(|recommendation| recommendation.priority);
    recommendations
}

pub fn criterion_recommendations(
    score: &CriterionScore,
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    let priority = Priority::from_score(score.raw_score);
    let label = score.criterion.label();

    if priority == Priority::Excellent {
        return vec![Recommendation::new(
            priority,
            score.criterion,
            format!(
                "{label} is excellent ({:.1}/100); no action needed.",
                score.raw_score
            ),
        )];
    }

    let mut messages = deficiency_messages(&score.breakdown, thresholds);
    if messages.is_empty() {
        messages.push(format!(
            "{label} scores {:.1}/100; review its sub-scores for incremental gains.",
            score.raw_score
        ));
    }

    messages
        .into_iter()
        .map(|message| Recommendation::new(priority, score.criterion, message))
        .collect()
}

fn range_text(range: IdealRange) -> String {
    format!("{}-{}", range.min, range.max)
}

fn deficiency_messages(breakdown: &Breakdown, thresholds: &Thresholds) -> Vec<String> {
    let mut messages = Vec::new();
    match breakdown {
        Breakdown::Unavailable(_) => {
            messages.push(
                "Could not be evaluated because the page document or text was unavailable; \
                 make sure the content renders without client-side errors."
                    .to_string(),
            );
        }
        Breakdown::Informativeness(b) => {
            if b.depth_score < 15.0 {
                messages.push(format!(
                    "Expand the article: {} words is thin, aim for 1,500+ words of in-depth coverage.",
                    b.word_count
                ));
            }
            if b.structure_score < 15.0 {
                messages.push(format!(
                    "Add more section headings (found {}); structure the post with H2/H3 subheadings.",
                    b.header_count
                ));
            }
            if b.media_score < 10.0 {
                messages.push(format!(
                    "Enrich the post with images and relevant links (found {} images, {} links).",
                    b.image_count, b.link_count
                ));
            }
            if b.citation_score < 10.0 {
                messages.push(format!(
                    "Cite more sources (found {} citations); link studies, data and expert quotes.",
                    b.citation_count
                ));
            }
        }
        Breakdown::Readability(b) => {
            if b.no_data {
                messages.push(
                    "No readability formula could be computed; publish at least a few full \
                     sentences of body text."
                        .to_string(),
                );
            }
            for (name, reading) in b.readings() {
                if let Some(reading) = reading.filter(|reading| reading.normalized < 70.0) {
                    messages.push(format!(
                        "Simplify the prose: {name} is {:.1}; use shorter sentences and plainer words.",
                        reading.value
                    ));
                }
            }
        }
        Breakdown::Engagement(b) => {
            if b.sentiment_score < 50.0 {
                messages.push(format!(
                    "Tone skews negative ({} negative vs {} positive words); balance criticism with solutions.",
                    b.negative_words, b.positive_words
                ));
            }
            if b.interaction_score < 15.0 {
                messages.push(format!(
                    "Invite interaction: ask readers questions and add calls to action (found {} questions, {} CTAs).",
                    b.questions, b.cta_words
                ));
            }
            if b.skimming_score < 20.0 {
                messages.push(
                    "Improve skimmability with bullet lists, descriptive subheadings and bold key phrases."
                        .to_string(),
                );
            }
        }
        Breakdown::Uniqueness(b) => {
            if b.research_bonus < 10.0 {
                messages.push(format!(
                    "Ground claims in research and data (found {} research terms).",
                    b.research_words
                ));
            }
            if b.first_person_bonus < 8.0 {
                messages.push(
                    "Share first-hand experience and opinions to differentiate from generic content."
                        .to_string(),
                );
            }
            if b.uniqueness_bonus < 10.0 {
                messages.push(format!(
                    "Vary vocabulary: unique word ratio is {:.2}, ideal is {}.",
                    b.unique_word_ratio,
                    range_text(thresholds.uniqueness.ideal_unique_ratio)
                ));
            }
            if b.primary_research_bonus < 4.0 {
                messages.push(
                    "Add primary research such as interviews, surveys or your own experiments."
                        .to_string(),
                );
            }
        }
        Breakdown::LayoutQuality(b) => {
            if !b.has_viewport {
                messages.push(
                    "Add a <meta name=\"viewport\"> tag so the page renders correctly on mobile."
                        .to_string(),
                );
            }
            if b.mobile_score < 10.0 {
                messages.push(
                    "Optimize for handheld and touch use: responsive breakpoints and larger tap targets."
                        .to_string(),
                );
            }
            if !b.has_https {
                messages.push("Serve the page over HTTPS.".to_string());
            }
            if b.h1_score == 0.0 {
                messages.push(format!(
                    "Use exactly one <h1> heading (found {}).",
                    b.h1_count
                ));
            }
            if b.whitespace_score < 10.0 {
                messages.push(format!(
                    "Break up long paragraphs; keep them under about {} words.",
                    thresholds.layout_quality.ideal_paragraph_words
                ));
            }
            if b.typography_score < 10.0 {
                messages.push(format!(
                    "Use a consistent type system of {} font families.",
                    range_text(thresholds.layout_quality.ideal_font_families)
                ));
            }
            if b.color_contrast_score < 5.0 {
                messages.push(
                    "Raise text contrast; light inline text colors are hard to read.".to_string(),
                );
            }
        }
        Breakdown::Discoverability(b) => {
            if !b.has_search {
                messages.push("Add a site search box.".to_string());
            }
            if b.navigation_score < 20.0 {
                messages.push(format!(
                    "Provide {} navigation menus (found {}).",
                    range_text(thresholds.discoverability.ideal_nav_count),
                    b.nav_count
                ));
            }
            if !b.has_breadcrumbs {
                messages.push("Add breadcrumbs so readers can move up the hierarchy.".to_string());
            }
            if !b.has_sitemap {
                messages.push("Link a sitemap from the page footer.".to_string());
            }
            if b.featured_score < 9.0 {
                messages.push("Highlight featured or popular posts.".to_string());
            }
            if b.category_score < 15.0 {
                messages.push(format!(
                    "Organize posts with category and tag links (found {}).",
                    b.category_links
                ));
            }
        }
        Breakdown::SeoKeywords(b) => {
            let seo = &thresholds.seo_keywords;
            if !b.has_title {
                messages.push("Add a <title> tag.".to_string());
            } else if !b.title_optimal {
                messages.push(format!(
                    "Adjust the title to {} characters (currently {}).",
                    range_text(seo.title_length),
                    b.title_length
                ));
            }
            if !b.has_meta_desc {
                messages.push("Add a meta description.".to_string());
            } else if !b.meta_desc_optimal {
                messages.push(format!(
                    "Adjust the meta description to {} characters (currently {}).",
                    range_text(seo.meta_description_length),
                    b.meta_desc_length
                ));
            }
            if !b.h1_optimal {
                messages.push(format!(
                    "Use a single <h1> carrying the primary keyword (found {}).",
                    b.h1_count
                ));
            }
            if !b.is_indexed {
                messages.push("Make sure the page is indexable (no noindex directive).".to_string());
            }
            if b.schema_markup_count == 0 {
                messages.push("Add JSON-LD structured data (Article/BlogPosting).".to_string());
            }
            if b.keyword_score < 20.0 {
                messages.push(format!(
                    "Tune primary keyword density toward {}% (currently {:.2}%).",
                    range_text(seo.keyword_density),
                    b.keyword_density
                ));
            }
            if b.linking_score < 10.0 {
                messages.push(format!(
                    "Add internal links to related posts (found {}).",
                    b.internal_links
                ));
            }
            if b.freshness_score < 7.0 {
                messages.push(
                    "Show a publish or update date and refresh stale content.".to_string(),
                );
            }
            if b.url_score < 8.0 {
                messages.push(
                    "Use a short, readable HTTPS URL slug without query strings.".to_string(),
                );
            }
        }
        Breakdown::AdExperience(b) => {
            if b.ad_indicator_count > 0 {
                let worst = b
                    .ad_types
                    .entries()
                    .into_iter()
                    .max_by_key(|(_, count)| *count)
                    .map(|(name, count)| format!("{name}: {count}"))
                    .unwrap_or_default();
                messages.push(format!(
                    "Reduce ad density: {} ad indicators found (largest category {worst}).",
                    b.ad_indicator_count
                ));
            }
            if b.placement_penalty > 0.0 {
                messages.push(
                    "Move ads out of the first screen and drop sticky ad units.".to_string(),
                );
            }
            if b.autoplay_penalty > 0.0 {
                messages.push("Disable autoplaying video and audio.".to_string());
            }
        }
        Breakdown::SocialIntegration(b) => {
            if b.platform_count == 0 {
                messages.push("Link the blog's social media profiles.".to_string());
            }
            if b.sharing_buttons == 0 {
                messages.push("Add share buttons to posts.".to_string());
            }
            if b.social_proof_score < 10.0 {
                messages.push(
                    "Show social proof: share counts, follower counts or reader testimonials."
                        .to_string(),
                );
            }
        }
    }
    messages
}
