//! Synonym-aware best-match lookup.
//!
//! [`SynonymMatcher`] tokenizes a query, expands it through a shared
//! [`SynonymSpace`], and scores every query variant against a list of
//! choices.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use synspace::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//! use synspace::matching::SynonymMatcher;
//! use synspace::synonym::{SynonymGroup, SynonymSpace};
//!
//! # fn main() -> synspace::error::Result<()> {
//! let space = SynonymSpace::with_vectors(vec![
//!     SynonymGroup::new(["苹果", "红富士", "Apple"]),
//!     SynonymGroup::new(["香蕉", "芭蕉"]),
//! ])?;
//! let matcher = SynonymMatcher::new(space, Arc::new(WhitespaceTokenizer::new()));
//!
//! let choices = ["苹果", "香蕉", "橙子"];
//! let found = matcher.best_match("红富士", &choices)?.unwrap();
//! assert_eq!(found.choice, "苹果");
//! assert_eq!(found.score, 100);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;
use crate::matching::config::MatchConfig;
use crate::matching::scorer::{RatioScorer, Scorer};
use crate::synonym::{SynonymGroup, SynonymSpace};

/// The winning choice for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The matched choice.
    pub choice: String,
    /// Position of the choice in the input slice.
    pub index: usize,
    /// Score of the match, from 0 to 100.
    pub score: u8,
    /// The query variant (raw or expanded) that produced the score.
    pub query: String,
}

/// Fuzzy matcher that expands queries through a synonym space.
///
/// The space sits behind a read-write lock: expansion and matching take the
/// read lock, [`replace_vectors`](Self::replace_vectors) and
/// [`push_vector`](Self::push_vector) take the write lock.
pub struct SynonymMatcher {
    space: Arc<RwLock<SynonymSpace>>,
    tokenizer: Arc<dyn Tokenizer>,
    scorer: Arc<dyn Scorer>,
    config: MatchConfig,
}

impl SynonymMatcher {
    /// Create a matcher with the [`RatioScorer`] and default configuration.
    pub fn new(space: SynonymSpace, tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::with_shared_space(Arc::new(RwLock::new(space)), tokenizer)
    }

    /// Create a matcher over a space shared with other owners.
    pub fn with_shared_space(
        space: Arc<RwLock<SynonymSpace>>,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Self {
        SynonymMatcher {
            space,
            tokenizer,
            scorer: Arc::new(RatioScorer::new()),
            config: MatchConfig::default(),
        }
    }

    /// Use `scorer` for similarity.
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Use `config`, failing if it is out of range.
    pub fn with_config(mut self, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Handle to the shared space.
    pub fn space(&self) -> Arc<RwLock<SynonymSpace>> {
        Arc::clone(&self.space)
    }

    /// Replace the space's vectors. On error the space is unchanged.
    pub fn replace_vectors(&self, groups: Vec<SynonymGroup>) -> Result<()> {
        self.space.write().set_vectors(groups)?;
        Ok(())
    }

    /// Append one group to the space. On error the space is unchanged.
    pub fn push_vector(&self, group: SynonymGroup) -> Result<()> {
        self.space.write().push_vector(group)?;
        Ok(())
    }

    /// Tokenize `text` and expand the tokens into phrases.
    pub fn expand(&self, text: &str) -> Result<SynonymGroup> {
        let tokens = self.tokenizer.tokenize_terms(text)?;
        Ok(self
            .space
            .read()
            .expand_query_with(&tokens, self.config.unmatched))
    }

    /// Query variants tried by [`best_match`](Self::best_match): the raw
    /// text first when configured, then the expanded phrases in sorted
    /// order without repeating the raw text.
    pub fn candidate_queries(&self, text: &str) -> Result<Vec<String>> {
        let expanded = self.expand(text)?;
        let mut candidates = Vec::with_capacity(expanded.len() + 1);
        if self.config.include_original {
            candidates.push(text.to_owned());
        }
        candidates.extend(
            expanded
                .into_terms()
                .into_iter()
                .filter(|phrase| !(self.config.include_original && phrase == text)),
        );
        Ok(candidates)
    }

    /// Find the choice that best matches `query` or one of its expansions.
    ///
    /// A variant replaces the current best only with a strictly higher
    /// score, starting from zero, so a zero score never matches. Among equal
    /// scores for one variant the earliest choice wins. Returns `None` when
    /// there are no choices or the best score is below the cutoff.
    pub fn best_match<S>(&self, query: &str, choices: &[S]) -> Result<Option<MatchResult>>
    where
        S: AsRef<str> + Sync,
    {
        let candidates = self.candidate_queries(query)?;
        let mut best: Option<MatchResult> = None;

        for candidate in candidates {
            let Some((index, score)) = self.best_choice(&candidate, choices) else {
                continue;
            };
            if score > best.as_ref().map_or(0, |current| current.score) {
                best = Some(MatchResult {
                    choice: choices[index].as_ref().to_owned(),
                    index,
                    score,
                    query: candidate,
                });
            }
        }

        let best = best.filter(|found| found.score >= self.config.cutoff);
        debug!(
            query,
            scorer = self.scorer.name(),
            matched = best.as_ref().map(|found| found.choice.as_str()),
            score = best.as_ref().map(|found| found.score),
            "best match"
        );
        Ok(best)
    }

    fn best_choice<S>(&self, query: &str, choices: &[S]) -> Option<(usize, u8)>
    where
        S: AsRef<str> + Sync,
    {
        choices
            .par_iter()
            .enumerate()
            .map(|(index, choice)| (index, self.scorer.score(query, choice.as_ref())))
            .reduce_with(|a, b| {
                if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
                    b
                } else {
                    a
                }
            })
    }
}
