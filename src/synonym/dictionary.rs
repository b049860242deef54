//! Loading a [`SynonymSpace`] from a JSON synonym dictionary.
//!
//! The dictionary is an array of synonym groups, where each group is an
//! array of terms that are synonyms of each other:
//!
//! ```json
//! [
//!   ["apple", "红富士", "Apple"],
//!   ["香蕉", "芭蕉"],
//!   ["汽车", "轿车", "小汽车"]
//! ]
//! ```
//!
//! Empty groups are ignored. Groups must be disjoint.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, SynspaceError};
use crate::synonym::group::SynonymGroup;
use crate::synonym::space::SynonymSpace;
use crate::synonym::value;

impl SynonymSpace {
    /// Build a space from dictionary JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let parsed: Value = serde_json::from_str(content).map_err(|e| {
            SynspaceError::parse(format!("Failed to parse synonym dictionary JSON: {}", e))
        })?;
        Self::from_dictionary_value(&parsed)
    }

    /// Build a space from a dictionary already decoded as JSON.
    pub fn from_dictionary_value(dictionary: &Value) -> Result<Self> {
        let groups = value::as_sequence(dictionary)?
            .iter()
            .map(SynonymGroup::from_value)
            .filter(|group| group.as_ref().map_or(true, |g| !g.is_empty()))
            .collect::<Result<Vec<_>>>()?;
        SynonymSpace::with_vectors(groups)
    }

    /// Load a space from a dictionary file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SynspaceError::storage(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let space = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            groups = space.len(),
            "loaded synonym dictionary"
        );
        Ok(space)
    }
}
