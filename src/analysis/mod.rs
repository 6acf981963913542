//! Text normalization for Xyston.
//!
//! This module provides the word-level normalization used when preparing
//! documents: stemming through a pluggable [`Stemmer`] capability, stop word
//! lists for filtering, and a [`Normalizer`] that bundles the two.

pub mod normalize;
pub mod stemmer;
pub mod stop;

// Re-export commonly used types
pub use normalize::Normalizer;
pub use stemmer::{EnglishStemmer, IdentityStemmer, Stemmer};
pub use stop::DEFAULT_ENGLISH_STOP_WORDS_SET;
