//! Similarity scorers for fuzzy matching.
//!
//! Scores are integers from 0 (nothing in common) to 100 (identical).

use crate::util::levenshtein::similarity_chars;

/// Scores how well a candidate string matches a query.
pub trait Scorer: Send + Sync {
    /// Score `candidate` against `query`, from 0 to 100.
    fn score(&self, query: &str, candidate: &str) -> u8;

    /// Get the name of this scorer.
    fn name(&self) -> &'static str;
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Whole-string similarity from normalized Levenshtein distance.
#[derive(Clone, Debug, Default)]
pub struct RatioScorer;

impl RatioScorer {
    pub fn new() -> Self {
        RatioScorer
    }
}

impl Scorer for RatioScorer {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let query: Vec<char> = query.chars().collect();
        let candidate: Vec<char> = candidate.chars().collect();
        to_score(similarity_chars(&query, &candidate))
    }

    fn name(&self) -> &'static str {
        "ratio"
    }
}

/// Best similarity of the shorter string against every equal-length window
/// of the longer one.
///
/// `"苹"` scores 100 against `"苹果"`. An empty string scores 0 against a
/// non-empty one.
#[derive(Clone, Debug, Default)]
pub struct PartialRatioScorer;

impl PartialRatioScorer {
    pub fn new() -> Self {
        PartialRatioScorer
    }
}

impl Scorer for PartialRatioScorer {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let query: Vec<char> = query.chars().collect();
        let candidate: Vec<char> = candidate.chars().collect();
        let (shorter, longer) = if query.len() <= candidate.len() {
            (&query, &candidate)
        } else {
            (&candidate, &query)
        };

        if shorter.is_empty() {
            return if longer.is_empty() { 100 } else { 0 };
        }

        let best = longer
            .windows(shorter.len())
            .map(|window| similarity_chars(shorter, window))
            .fold(0.0_f64, f64::max);
        to_score(best)
    }

    fn name(&self) -> &'static str {
        "partial_ratio"
    }
}
