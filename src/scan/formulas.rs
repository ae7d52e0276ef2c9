//! The six classic readability formulas.

use crate::types::signals::ReadabilitySignals;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_TEXT_CHARS: usize = 100;
pub const MIN_SMOG_SENTENCES: u32 = 3;

static RE_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*").expect("word regex"));
static RE_SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence end regex"));
static RE_VOWEL_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[aeiouy]+").expect("vowel group regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextStats {
    pub sentences: u32,
    pub words: u32,
    pub letters: u32,
    pub syllables: u32,
    pub polysyllables: u32,
}

/// Heuristic English syllable count, at least one per word.
pub fn syllables(word: &str) -> u32 {
    let lower = word.to_ascii_lowercase();
    let lower = lower.trim_end_matches("'s");
    let mut count = RE_VOWEL_GROUP.find_iter(lower).count() as u32;
    if lower.len() > 2 && lower.ends_with('e') && !lower.ends_with("le") && count > 1 {
        count -= 1;
    }
    if lower.ends_with("ed") && lower.len() > 3 && count > 1 {
        let stem = &lower[..lower.len() - 2];
        if !stem.ends_with('t') && !stem.ends_with('d') {
            count -= 1;
        }
    }
    count.max(1)
}

pub fn text_stats(text: &str) -> TextStats {
    let mut stats = TextStats::default();
    for word in RE_WORD.find_iter(text).map(|m| m.as_str()) {
        let syllable_count = syllables(word);
        stats.words += 1;
        stats.letters += word.chars().filter(|c| c.is_ascii_alphabetic()).count() as u32;
        stats.syllables += syllable_count;
        if syllable_count >= 3 {
            stats.polysyllables += 1;
        }
    }
    stats.sentences = RE_SENTENCE_END
        .split(text)
        .filter(|segment| RE_WORD.is_match(segment))
        .count()
        .max(1) as u32;
    stats
}

pub fn readability_signals(text: &str) -> ReadabilitySignals {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return ReadabilitySignals::default();
    }
    let stats = text_stats(text);
    if stats.words == 0 {
        return ReadabilitySignals::default();
    }

    let words = f64::from(stats.words);
    let sentences = f64::from(stats.sentences);
    let words_per_sentence = words / sentences;
    let syllables_per_word = f64::from(stats.syllables) / words;
    let letters_per_word = f64::from(stats.letters) / words;
    let complex_share = f64::from(stats.polysyllables) / words;

    let letters_per_100 = letters_per_word * 100.0;
    let sentences_per_100 = sentences / words * 100.0;

    let smog_index = (stats.sentences >= MIN_SMOG_SENTENCES).then(|| {
        1.043 * (f64::from(stats.polysyllables) * 30.0 / sentences).sqrt() + 3.1291
    });

    ReadabilitySignals {
        flesch_reading_ease: Some(
            206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
        ),
        flesch_kincaid_grade: Some(
            0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
        ),
        gunning_fog: Some(0.4 * (words_per_sentence + 100.0 * complex_share)),
        smog_index,
        automated_readability: Some(4.71 * letters_per_word + 0.5 * words_per_sentence - 21.43),
        coleman_liau: Some(0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "The cat sat on the mat. It was a sunny day and the cat was happy. \
        Children played outside in the warm afternoon light. Everyone enjoyed the weather.";

    #[test]
    fn syllable_heuristic_handles_common_words() {
        assert_eq!(syllables("cat"), 1);
        assert_eq!(syllables("make"), 1);
        assert_eq!(syllables("table"), 2);
        assert_eq!(syllables("happy"), 2);
        assert_eq!(syllables("played"), 1);
        assert_eq!(syllables("wanted"), 2);
        assert_eq!(syllables("everyone"), 3);
        assert_eq!(syllables("rhythm"), 1);
    }

    #[test]
    fn short_text_yields_no_formulas() {
        let signals = readability_signals("Too short to measure.");
        assert_eq!(signals.available(), 0);
    }

    #[test]
    fn simple_prose_reads_easily() {
        let signals = readability_signals(SAMPLE);
        let ease = signals.flesch_reading_ease.expect("ease computed");
        let grade = signals.flesch_kincaid_grade.expect("grade computed");
        assert!(ease > 70.0, "ease was {ease}");
        assert!(grade < 7.0, "grade was {grade}");
        assert!(signals.smog_index.is_some());
    }

    #[test]
    fn smog_needs_three_sentences() {
        let text = "This single sentence keeps going with plenty of ordinary words so that \
            the whole thing comfortably passes the minimum length without any break at all";
        let signals = readability_signals(text);
        assert!(signals.flesch_reading_ease.is_some());
        assert_eq!(signals.smog_index, None);
    }

    #[test]
    fn stats_count_sentences_without_trailing_punctuation() {
        let stats = text_stats("One two. Three four! Five");
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.words, 5);
    }
}
