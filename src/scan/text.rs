//! Lexicon and frequency counts over visible text.

use crate::types::signals::UniquenessSignals;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

static RE_POSITIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(great|excellent|amazing|love|perfect|wonderful|good|nice|awesome)\b")
        .expect("positive lexicon regex")
});
static RE_NEGATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(bad|terrible|awful|hate|worst|horrible|poor|disappointing)\b")
        .expect("negative lexicon regex")
});
static RE_CTA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(click|learn|discover|join|subscribe|download|sign\s+up|get\s+started)\b")
        .expect("cta lexicon regex")
});
static RE_RESEARCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(research|study|survey|data|analysis|experiment|finding)\b")
        .expect("research lexicon regex")
});
static RE_FIRST_PERSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(i|we|our|us|my|mine|ours)\b").expect("first person lexicon regex")
});
static RE_PRIMARY_RESEARCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(interview|surveyed|studied|analyzed|experimented|observed)\b")
        .expect("primary research lexicon regex")
});
static RE_CITATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[\d{1,3}\]|\baccording to\b|\bet al\.|\bdoi\b")
        .expect("citation regex")
});
static RE_LONG_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("long word regex"));

const STOPWORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "both", "could", "does", "each", "even",
    "from", "have", "here", "into", "just", "like", "made", "make", "many", "more", "most",
    "much", "must", "only", "other", "over", "same", "should", "some", "such", "than", "that",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "very",
    "want", "were", "what", "when", "where", "which", "while", "will", "with", "would", "your",
];

/// Words as whitespace-separated tokens.
pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToneCounts {
    pub positive_words: u32,
    pub negative_words: u32,
    pub questions: u32,
    pub exclamations: u32,
    pub cta_words: u32,
}

pub fn tone_counts(text: &str) -> ToneCounts {
    ToneCounts {
        positive_words: RE_POSITIVE.find_iter(text).count() as u32,
        negative_words: RE_NEGATIVE.find_iter(text).count() as u32,
        questions: text.matches('?').count() as u32,
        exclamations: text.matches('!').count() as u32,
        cta_words: RE_CTA.find_iter(text).count() as u32,
    }
}

fn long_words(text: &str) -> Vec<String> {
    RE_LONG_WORD
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

pub fn uniqueness_signals(text: &str) -> UniquenessSignals {
    let words = long_words(text);
    let unique_word_ratio = if words.is_empty() {
        0.0
    } else {
        let distinct = words.iter().collect::<BTreeSet<_>>().len();
        distinct as f64 / words.len() as f64
    };

    UniquenessSignals {
        research_words: RE_RESEARCH.find_iter(text).count() as u32,
        first_person_words: RE_FIRST_PERSON.find_iter(text).count() as u32,
        unique_word_ratio,
        primary_research_words: RE_PRIMARY_RESEARCH.find_iter(text).count() as u32,
    }
}

/// Inline references in running text: `[n]` markers, attributions and DOIs.
pub fn text_citations(text: &str) -> u32 {
    RE_CITATION.find_iter(text).count() as u32
}

/// Share of all words taken by the most frequent non-stopword, in percent.
pub fn keyword_density(text: &str) -> f64 {
    let total = word_count(text);
    if total == 0 {
        return 0.0;
    }
    let mut frequencies = BTreeMap::<String, u32>::new();
    for word in long_words(text) {
        if !STOPWORDS.contains(&word.as_str()) {
            *frequencies.entry(word).or_default() += 1;
        }
    }
    let top = frequencies.values().copied().max().unwrap_or(0);
    f64::from(top) / f64::from(total) * 100.0
}
