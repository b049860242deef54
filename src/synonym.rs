//! Synonym groups and the synonym space that combines them.
//!
//! - [`SynonymGroup`] - a set of interchangeable terms with union and
//!   concatenation-product operations
//! - [`SynonymSpace`] - ordered, pairwise-disjoint groups with term lookup and
//!   positional query expansion

pub mod dictionary;
pub mod group;
pub mod space;
pub mod value;

pub use group::SynonymGroup;
pub use space::{SynonymSpace, UnmatchedTokenPolicy};
