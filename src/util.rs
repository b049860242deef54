//! Shared utility modules used across Synspace components.

pub mod levenshtein;
