//! Default stop word lists.
//!
//! Stop words are common words (like "the", "is", "at") that typically don't
//! carry topical weight. Documents filter them out through
//! [`Document::filter_words`](crate::document::Document::filter_words) or a
//! [`Normalizer`](crate::analysis::Normalizer); the exclude set is always
//! caller-supplied, and this module only provides a reasonable default.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// Default English stop words as a HashSet.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});
