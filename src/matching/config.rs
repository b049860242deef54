//! Configuration for synonym-aware fuzzy matching.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynspaceError};
use crate::synonym::UnmatchedTokenPolicy;

/// Configuration for [`SynonymMatcher`](super::SynonymMatcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum score (0-100) a best match needs to be returned.
    pub cutoff: u8,

    /// Whether the raw query text is tried before its expansions.
    pub include_original: bool,

    /// How expansion treats tokens that have no synonym group.
    pub unmatched: UnmatchedTokenPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cutoff: 70,
            include_original: true,
            unmatched: UnmatchedTokenPolicy::Skip,
        }
    }
}

impl MatchConfig {
    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.cutoff > 100 {
            return Err(SynspaceError::invalid_config(format!(
                "cutoff must be between 0 and 100, got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.cutoff, 70);
        assert!(config.include_original);
        assert_eq!(config.unmatched, UnmatchedTokenPolicy::Skip);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"unmatched": "literal"}"#).unwrap();
        assert_eq!(config.cutoff, 70);
        assert_eq!(config.unmatched, UnmatchedTokenPolicy::Literal);
    }

    #[test]
    fn test_validate_rejects_cutoff_above_100() {
        let config = MatchConfig {
            cutoff: 101,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SynspaceError::InvalidConfig(_))
        ));
    }
}
