//! # Synspace
//!
//! Synonym group algebra and positional phrase expansion.
//!
//! ## Features
//!
//! - Synonym groups with union and concatenation-product operations
//! - Synonym spaces that keep groups pairwise disjoint
//! - Expansion of token sequences into every synonym phrase variant
//! - Pluggable tokenizers and fuzzy scorers for best-match lookup

pub mod analysis;
pub mod error;
pub mod matching;
pub mod synonym;
pub mod util;

pub mod prelude {
    pub use crate::analysis::Tokenizer;
    pub use crate::error::{Result, SynspaceError};
    pub use crate::matching::{MatchConfig, MatchResult, SynonymMatcher};
    pub use crate::synonym::{SynonymGroup, SynonymSpace, UnmatchedTokenPolicy};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
