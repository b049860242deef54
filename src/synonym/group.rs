//! A set of interchangeable terms representing one semantic unit.
//!
//! # Examples
//!
//! ```
//! use synspace::synonym::SynonymGroup;
//!
//! let apple = SynonymGroup::new(["apple", "红富士"]);
//! let phone = SynonymGroup::new(["phone", "手机"]);
//!
//! let phrases = apple.product(&phone);
//! assert_eq!(phrases.len(), 4);
//! assert!(phrases.contains("红富士手机"));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::synonym::value;

/// Separator used by the [`Display`](fmt::Display) rendering.
pub const DISPLAY_SEPARATOR: &str = ";";

/// A set of synonymous terms.
///
/// Terms are unique and kept in sorted order, which makes iteration and the
/// display form deterministic. A group only ever grows: [`extend`](Self::extend)
/// unions new terms in and nothing removes them.
///
/// Comparing a group with a string (`group == "apple"`) tests membership.
/// Comparing two groups tests whether they hold the same term set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymGroup {
    terms: BTreeSet<String>,
}

impl SynonymGroup {
    /// Create a group from any collection of terms. Duplicates collapse.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SynonymGroup {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an empty group.
    ///
    /// The empty group is absorbing under [`product`](Self::product) and is
    /// what expansion returns when there is nothing to expand.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a group from a JSON array of strings.
    ///
    /// Fails with `TypeKind` if `value` is not an array or holds a non-string.
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::new(value::as_terms(value)?))
    }

    /// Union `terms` into this group. Adding a present term is a no-op.
    pub fn extend<I, S>(&mut self, terms: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Union a JSON array of strings into this group.
    ///
    /// The whole input is validated first, so on error the group is unchanged.
    pub fn extend_from_value(&mut self, value: &Value) -> Result<&mut Self> {
        let terms = value::as_terms(value)?;
        Ok(self.extend(terms))
    }

    /// Whether `term` is one of this group's terms.
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    /// Membership test for an untyped value. Fails with `TypeKind` unless
    /// `value` is a string.
    pub fn contains_value(&self, value: &Value) -> Result<bool> {
        Ok(self.contains(value::as_term(value)?))
    }

    /// Equality against an untyped value: true iff `value` is a string
    /// contained in this group. Any other kind compares unequal.
    pub fn equals_value(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|term| self.contains(term))
    }

    /// Cartesian product of concatenations.
    ///
    /// Every term of `self` immediately followed by every term of `other`,
    /// with no separator. Empty if either side is empty.
    pub fn product(&self, other: &SynonymGroup) -> SynonymGroup {
        let mut terms = BTreeSet::new();
        for left in &self.terms {
            for right in &other.terms {
                let mut phrase = String::with_capacity(left.len() + right.len());
                phrase.push_str(left);
                phrase.push_str(right);
                terms.insert(phrase);
            }
        }
        SynonymGroup { terms }
    }

    /// Iterate the terms in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    /// Borrow the underlying term set.
    pub fn terms(&self) -> &BTreeSet<String> {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the group has no terms. A group holding only `""` is not empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consume the group, returning its terms in sorted order.
    pub fn into_terms(self) -> Vec<String> {
        self.terms.into_iter().collect()
    }
}

impl fmt::Display for SynonymGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(DISPLAY_SEPARATOR)?;
            }
            f.write_str(term)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for SynonymGroup {
    fn eq(&self, other: &str) -> bool {
        self.contains(other)
    }
}

impl PartialEq<&str> for SynonymGroup {
    fn eq(&self, other: &&str) -> bool {
        self.contains(other)
    }
}

impl PartialEq<String> for SynonymGroup {
    fn eq(&self, other: &String) -> bool {
        self.contains(other)
    }
}

impl<S: Into<String>> FromIterator<S> for SynonymGroup {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a SynonymGroup {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_collapses_duplicates() {
        let group = SynonymGroup::new(vec!["big", "large", "big"]);
        assert_eq!(group.len(), 2);
        assert!(group.contains("big"));
        assert!(group.contains("large"));
    }

    #[test]
    fn test_from_value_rejects_non_strings() {
        let err = SynonymGroup::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(err.is_type_kind());

        let err = SynonymGroup::from_value(&json!("apple")).unwrap_err();
        assert!(err.is_type_kind());
    }

    #[test]
    fn test_extend_chains() {
        let mut group = SynonymGroup::new(["wwwwwwwww"]);
        group.extend(["w", "ww"]).extend(["www", "w"]);
        assert_eq!(group.len(), 4);
        assert_eq!(group.to_string(), "w;ww;www;wwwwwwwww");
    }

    #[test]
    fn test_extend_from_value_is_atomic() {
        let mut group = SynonymGroup::new(["a"]);
        let err = group.extend_from_value(&json!(["b", 7])).unwrap_err();
        assert!(err.is_type_kind());
        assert_eq!(group, SynonymGroup::new(["a"]));

        group.extend_from_value(&json!(["b"])).unwrap();
        assert!(group.contains("b"));
    }

    #[test]
    fn test_string_equality_is_membership() {
        let group = SynonymGroup::new(["apple", "红富士"]);
        assert!(group == "apple");
        assert!(group == "红富士".to_string());
        assert!(group != "orange");
    }

    #[test]
    fn test_group_equality_is_same_terms() {
        let a = SynonymGroup::new(["x", "y"]);
        let b = SynonymGroup::new(["y", "x", "x"]);
        let c = SynonymGroup::new(["x"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_value_membership() {
        let group = SynonymGroup::new(["apple"]);
        assert!(group.contains_value(&json!("apple")).unwrap());
        assert!(!group.contains_value(&json!("pear")).unwrap());
        assert!(group.contains_value(&json!(1)).unwrap_err().is_type_kind());

        assert!(group.equals_value(&json!("apple")));
        assert!(!group.equals_value(&json!(1)));
        assert!(!group.equals_value(&json!(["apple"])));
    }

    #[test]
    fn test_product_concatenates_in_order() {
        let a = SynonymGroup::new(["a"]);
        let b = SynonymGroup::new(["b"]);
        assert_eq!(a.product(&b), SynonymGroup::new(["ab"]));
        assert_eq!(b.product(&a), SynonymGroup::new(["ba"]));
    }

    #[test]
    fn test_product_with_empty_is_empty() {
        let a = SynonymGroup::new(["a", "b"]);
        assert!(a.product(&SynonymGroup::empty()).is_empty());
        assert!(SynonymGroup::empty().product(&a).is_empty());
    }

    #[test]
    fn test_empty_string_term_is_not_empty_group() {
        let blank = SynonymGroup::new([""]);
        assert!(!blank.is_empty());
        assert_ne!(blank, SynonymGroup::empty());

        let a = SynonymGroup::new(["a", "b"]);
        assert_eq!(a.product(&blank), a);
    }

    #[test]
    fn test_serde_transparent() {
        let group = SynonymGroup::new(["b", "a"]);
        assert_eq!(serde_json::to_string(&group).unwrap(), r#"["a","b"]"#);

        let parsed: SynonymGroup = serde_json::from_str(r#"["x","x","y"]"#).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
