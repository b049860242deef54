//! Levenshtein edit distance over Unicode scalar values.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// The minimum number of single-character insertions, deletions or
/// substitutions needed to turn `s1` into `s2`. Characters, not bytes, are
/// compared, so `"手机"` and `"手表"` are one edit apart.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    distance_chars(&s1_chars, &s2_chars)
}

/// Distance between two pre-split character slices.
pub fn distance_chars(s1: &[char], s2: &[char]) -> usize {
    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }

    // Two rows are enough
    let mut prev_row: Vec<usize> = (0..=s2.len()).collect();
    let mut curr_row = vec![0; s2.len() + 1];

    for (i, &c1) in s1.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &c2) in s2.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2.len()]
}

/// Normalized similarity between 0.0 and 1.0. 1.0 means identical; two
/// empty strings are identical.
pub fn levenshtein_similarity(s1: &str, s2: &str) -> f64 {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    similarity_chars(&s1_chars, &s2_chars)
}

/// [`levenshtein_similarity`] over pre-split character slices.
pub fn similarity_chars(s1: &[char], s2: &[char]) -> f64 {
    let max_len = s1.len().max(s2.len());
    if max_len == 0 {
        return 1.0;
    }

    let distance = distance_chars(s1, s2);
    1.0 - (distance as f64 / max_len as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2);
    }

    #[test]
    fn test_distance_counts_characters() {
        assert_eq!(levenshtein_distance("手机", "手表"), 1);
        assert_eq!(levenshtein_distance("小汽车销售", "汽车销售"), 1);
    }

    #[test]
    fn test_levenshtein_similarity() {
        assert!((levenshtein_similarity("", "") - 1.0).abs() < 1e-9);
        assert!((levenshtein_similarity("abc", "abc") - 1.0).abs() < 1e-9);
        assert!((levenshtein_similarity("abc", "def") - 0.0).abs() < 1e-9);
        assert!((levenshtein_similarity("苹果", "苹") - 0.5).abs() < 1e-9);

        let ratio = levenshtein_similarity("search", "serach");
        assert!(ratio > 0.5 && ratio < 1.0);
    }
}
