//! An ordered collection of pairwise-disjoint synonym groups.
//!
//! A [`SynonymSpace`] keeps its groups ("vectors") in an arena and maps every
//! term to the index of the one group that owns it. Disjointness ("full
//! rank") is checked whenever the vectors are assigned, so a term lookup
//! never has more than one answer.
//!
//! # Examples
//!
//! ```
//! use synspace::synonym::{SynonymGroup, SynonymSpace};
//!
//! # fn main() -> synspace::error::Result<()> {
//! let mut space = SynonymSpace::new();
//! space.set_vectors(vec![
//!     SynonymGroup::new(["apple", "红富士"]),
//!     SynonymGroup::new(["phone", "手机"]),
//! ])?;
//!
//! let phrases = space.expand_query(["apple", "phone"]);
//! assert_eq!(phrases.len(), 4);
//! assert!(phrases.contains("红富士手机"));
//! # Ok(())
//! # }
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::error::{Result, SynspaceError};
use crate::synonym::group::SynonymGroup;
use crate::synonym::value;

/// What expansion does with a token that belongs to no group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedTokenPolicy {
    /// Drop the token; only tokens with registered synonyms participate.
    #[default]
    Skip,

    /// Keep the token as a single-term group so it appears verbatim in
    /// every expanded phrase, concatenated with no separator like any other
    /// product term.
    Literal,
}

/// Term index: term -> position of its owning group.
type TermIndex = AHashMap<String, usize>;

/// Ordered, pairwise-disjoint synonym groups with term lookup and expansion.
#[derive(Debug, Clone, Default)]
pub struct SynonymSpace {
    vectors: Vec<SynonymGroup>,
    index: TermIndex,
}

impl SynonymSpace {
    /// Create an empty space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a space holding `groups`, failing if they are not disjoint.
    pub fn with_vectors(groups: Vec<SynonymGroup>) -> Result<Self> {
        let mut space = Self::new();
        space.set_vectors(groups)?;
        Ok(space)
    }

    /// Check that no term appears in two of `groups`.
    ///
    /// Groups are scanned in index order. The error names the first term
    /// found in a second group along with both group indices.
    pub fn check_rank(groups: &[SynonymGroup]) -> Result<()> {
        Self::build_index(groups).map(|_| ())
    }

    fn build_index(groups: &[SynonymGroup]) -> Result<TermIndex> {
        let mut index = TermIndex::with_capacity(groups.iter().map(SynonymGroup::len).sum());
        for (position, group) in groups.iter().enumerate() {
            for term in group {
                if let Some(&owner) = index.get(term) {
                    warn!(term = %term, first = owner, second = position, "rank violation");
                    return Err(SynspaceError::rank_violation(term.clone(), owner, position));
                }
                index.insert(term.clone(), position);
            }
        }
        Ok(index)
    }

    /// Replace the held vectors with `groups`.
    ///
    /// Full rank is validated before anything changes; on error the space
    /// keeps its previous vectors.
    pub fn set_vectors(&mut self, groups: Vec<SynonymGroup>) -> Result<&mut Self> {
        let index = Self::build_index(&groups)?;
        debug!(
            groups = groups.len(),
            terms = index.len(),
            "committed synonym vectors"
        );
        self.vectors = groups;
        self.index = index;
        Ok(self)
    }

    /// Replace the held vectors from a JSON array of string arrays.
    ///
    /// Fails with `TypeKind` if `value` is not an array or any element is not
    /// an array of strings, and with `RankViolation` if the groups overlap.
    pub fn set_vectors_from_value(&mut self, value: &Value) -> Result<&mut Self> {
        let groups = value::as_sequence(value)?
            .iter()
            .map(SynonymGroup::from_value)
            .collect::<Result<Vec<_>>>()?;
        self.set_vectors(groups)
    }

    /// Append one group, checking it only against the terms already held.
    pub fn push_vector(&mut self, group: SynonymGroup) -> Result<&mut Self> {
        let position = self.vectors.len();
        if let Some((term, &owner)) = group
            .iter()
            .find_map(|term| self.index.get(term).map(|owner| (term, owner)))
        {
            warn!(term = %term, first = owner, second = position, "rank violation");
            return Err(SynspaceError::rank_violation(term, owner, position));
        }

        for term in &group {
            self.index.insert(term.clone(), position);
        }
        self.vectors.push(group);
        Ok(self)
    }

    /// The group containing `token`, or `None` if it has no registered synonyms.
    pub fn find_vector(&self, token: &str) -> Option<&SynonymGroup> {
        self.index
            .get(token)
            .and_then(|&position| self.vectors.get(position))
    }

    /// [`find_vector`](Self::find_vector) for an untyped value. Fails with
    /// `TypeKind` unless `value` is a string.
    pub fn find_vector_value(&self, value: &Value) -> Result<Option<&SynonymGroup>> {
        Ok(self.find_vector(value::as_term(value)?))
    }

    /// All terms interchangeable with `term`, including itself.
    ///
    /// An unregistered term is only a synonym of itself.
    pub fn synonyms_of(&self, term: &str) -> Vec<String> {
        match self.find_vector(term) {
            Some(group) => group.iter().map(str::to_owned).collect(),
            None => vec![term.to_owned()],
        }
    }

    /// Expand `tokens` into every phrase built from one synonym per token.
    ///
    /// Tokens without a group are skipped. The resolved groups are combined
    /// left to right with [`SynonymGroup::product`], so phrases follow token
    /// order. Returns an empty group when no token resolves.
    pub fn expand_query<I, S>(&self, tokens: I) -> SynonymGroup
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.expand_query_with(tokens, UnmatchedTokenPolicy::Skip)
    }

    /// [`expand_query`](Self::expand_query) with an explicit policy for
    /// unmatched tokens.
    pub fn expand_query_with<I, S>(&self, tokens: I, policy: UnmatchedTokenPolicy) -> SynonymGroup
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut expanded: Option<SynonymGroup> = None;
        let mut token_count = 0;
        let mut resolved = 0;

        for token in tokens {
            let token = token.as_ref();
            token_count += 1;

            let literal;
            let group = match (self.find_vector(token), policy) {
                (Some(group), _) => {
                    resolved += 1;
                    group
                }
                (None, UnmatchedTokenPolicy::Literal) => {
                    literal = SynonymGroup::new([token]);
                    &literal
                }
                (None, UnmatchedTokenPolicy::Skip) => {
                    trace!(token, "skipping token without synonyms");
                    continue;
                }
            };

            expanded = Some(match expanded {
                None => group.clone(),
                Some(acc) => acc.product(group),
            });
        }

        let expanded = expanded.unwrap_or_default();
        debug!(
            tokens = token_count,
            resolved,
            phrases = expanded.len(),
            "expanded query"
        );
        expanded
    }

    /// [`expand_query`](Self::expand_query) for an untyped value. Fails with
    /// `TypeKind` unless `value` is an array of strings.
    pub fn expand_query_value(&self, value: &Value) -> Result<SynonymGroup> {
        let tokens = value::as_terms(value)?;
        Ok(self.expand_query(tokens))
    }

    /// The held groups, in order.
    pub fn vectors(&self) -> &[SynonymGroup] {
        &self.vectors
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether no groups are held.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of distinct terms across all groups.
    pub fn term_count(&self) -> usize {
        self.index.len()
    }
}
