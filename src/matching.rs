//! Fuzzy matching of queries against candidate strings, with synonym
//! expansion of the query.
//!
//! - [`Scorer`] - similarity between two strings on a 0-100 scale
//! - [`MatchConfig`] - cutoff and expansion settings
//! - [`SynonymMatcher`] - expands a query and picks the best-scoring choice

pub mod config;
pub mod matcher;
pub mod scorer;

pub use config::MatchConfig;
pub use matcher::{MatchResult, SynonymMatcher};
pub use scorer::{PartialRatioScorer, RatioScorer, Scorer};
