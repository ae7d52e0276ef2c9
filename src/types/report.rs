use crate::types::breakdown::Breakdown;
use crate::types::scoring::{Contribution, Criterion, Score};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Severity tiers, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
    Excellent,
}

impl Priority {
    pub const ALL: [Priority; 5] = [
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Excellent,
    ];

    pub fn from_score(score: Score) -> Self {
        if score < 50.0 {
            Self::Critical
        } else if score < 70.0 {
            Self::High
        } else if score < 80.0 {
            Self::Medium
        } else if score < 90.0 {
            Self::Low
        } else {
            Self::Excellent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Excellent => "EXCELLENT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub criterion: Criterion,
    pub message: String,
}

impl Recommendation {
    pub fn new(priority: Priority, criterion: Criterion, message: impl Into<String>) -> Self {
        Self {
            priority,
            criterion,
            message: message.into(),
        }
    }
}

/// Terminal output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall_score: Score,
    pub scores: BTreeMap<Criterion, Score>,
    pub score_breakdowns: BTreeMap<Criterion, Breakdown>,
    pub contributions: BTreeMap<Criterion, Contribution>,
    pub recommendations: Vec<Recommendation>,
}

impl AnalysisResult {
    pub fn recommendations_for(&self, priority: Priority) -> impl Iterator<Item = &Recommendation> {
        self.recommendations
            .iter()
            .filter(move |recommendation| recommendation.priority == priority)
    }
}

/// Envelope written by the CLI around an [`AnalysisResult`].
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub url: Option<String>,
    pub analyzed_at: String,
    pub source_sha256: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_follow_thresholds() {
        assert_eq!(Priority::from_score(49.999), Priority::Critical);
        assert_eq!(Priority::from_score(50.0), Priority::High);
        assert_eq!(Priority::from_score(69.999), Priority::High);
        assert_eq!(Priority::from_score(70.0), Priority::Medium);
        assert_eq!(Priority::from_score(79.999), Priority::Medium);
        assert_eq!(Priority::from_score(80.0), Priority::Low);
        assert_eq!(Priority::from_score(89.999), Priority::Low);
        assert_eq!(Priority::from_score(90.0), Priority::Excellent);
        assert_eq!(Priority::from_score(100.0), Priority::Excellent);
    }

    #[test]
    fn priorities_sort_most_severe_first() {
        let mut tiers = vec![Priority::Low, Priority::Excellent, Priority::Critical, Priority::Medium];
        tiers.sort();
        assert_eq!(
            tiers,
            vec![Priority::Critical, Priority::Medium, Priority::Low, Priority::Excellent]
        );
    }

    #[test]
    fn priority_serializes_uppercase() {
        let rendered = serde_json::to_string(&Priority::Critical).expect("priority should serialize");
        assert_eq!(rendered, "\"CRITICAL\"");
    }
}
