//! Best-effort extraction of [`PageSignals`] from a local page snapshot.
//!
//! The scorers only ever see the signal record, so anything produced by an
//! external fetcher/parser can stand in for this module.

pub mod address;
pub mod ads;
pub mod filesystem;
pub mod formulas;
pub mod freshness;
pub mod html;
pub mod page;
pub mod social;
pub mod text;

use crate::types::signals::{
    ContentSignals, EngagementSignals, PageSignals, ReadabilitySignals, SeoSignals,
};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct PageInput {
    pub html: Option<String>,
    pub text: Option<String>,
    pub url: Option<String>,
    /// Day that freshness is measured against.
    pub reference_date: NaiveDate,
}

impl PageInput {
    pub fn new(reference_date: NaiveDate) -> Self {
        Self {
            html: None,
            text: None,
            url: None,
            reference_date,
        }
    }

    /// Explicit text wins; otherwise the visible text of the document.
    pub fn effective_text(&self) -> Option<String> {
        self.text
            .clone()
            .or_else(|| self.html.as_deref().map(html::visible_text))
            .filter(|text| !text.trim().is_empty())
    }
}

/// `<blockquote>`/`<q>` elements that name their source.
fn quoted_sources(document: &str) -> u32 {
    html::opening_tags(document, &["blockquote", "q"])
        .into_iter()
        .filter(|tag| html::attributes(tag).contains_key("cite"))
        .count() as u32
}

pub fn discover(input: &PageInput) -> PageSignals {
    let document = input.html.as_deref().filter(|html| !html.trim().is_empty());
    let text = input.effective_text();
    let text = text.as_deref();
    let page_url = input.url.as_deref();
    let metas = document.map(html::meta_tags).unwrap_or_default();

    let content = document.zip(text).map(|(document, text)| ContentSignals {
        word_count: text::word_count(text),
        header_count: html::count_tags(document, &["h1", "h2", "h3", "h4", "h5", "h6"]),
        image_count: html::count_tags(document, &["img"]),
        link_count: html::count_tags(document, &["a"]),
        citation_count: text::text_citations(text)
            .saturating_add(html::count_tags(document, &["cite"]))
            .saturating_add(quoted_sources(document)),
    });

    let engagement = text.map(|text| {
        let tone = text::tone_counts(text);
        let count = |names: &[&str]| document.map_or(0, |document| html::count_tags(document, names));
        EngagementSignals {
            positive_words: tone.positive_words,
            negative_words: tone.negative_words,
            questions: tone.questions,
            exclamations: tone.exclamations,
            cta_words: tone.cta_words,
            subheading_count: count(&["h2", "h3", "h4"]),
            list_count: count(&["ul", "ol"]),
            emphasis_count: count(&["strong", "b", "em", "mark"]),
        }
    });

    let seo = document.map(|document| {
        let links = page::link_counts(document, page_url);
        let dates = freshness::page_dates(&metas, Some(document), text);
        SeoSignals {
            title_length: html::title(document).map(|title| title.chars().count() as u32),
            meta_description_length: html::meta_content(&metas, "description")
                .map(|description| description.trim().chars().count() as u32)
                .filter(|length| *length > 0),
            h1_count: html::count_tags(document, &["h1"]),
            is_indexed: page::is_indexed(&metas),
            schema_markup_count: page::schema_markup_count(document),
            keyword_density: text.map_or(0.0, text::keyword_density),
            internal_links: links.internal,
            external_links: links.external,
            days_since_published: freshness::days_since_published(&dates, input.reference_date),
            url: page_url.map(address::url_signals),
        }
    });

    let signals = PageSignals {
        content,
        readability: text.map_or_else(ReadabilitySignals::default, formulas::readability_signals),
        engagement,
        uniqueness: text.map(text::uniqueness_signals),
        layout: document.map(|document| page::layout_signals(document, &metas, page_url)),
        discovery: document.map(page::discovery_signals),
        seo,
        ads: document.map(ads::ad_signals),
        social: document.map(social::social_signals),
    };

    tracing::debug!(
        has_document = document.is_some(),
        has_text = text.is_some(),
        readability_formulas = signals.readability.available(),
        "page signals extracted"
    );
    signals
}
