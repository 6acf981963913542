//! Stemming capability and stemmer implementations.

use rust_stemmers::Algorithm;

/// Trait for stemming algorithms.
///
/// A stemmer is a pure per-word mapping: the same input word always yields
/// the same stem, and no state is retained across calls. Any conforming
/// implementation can be swapped in without touching document logic.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

/// English stemmer backed by the Snowball algorithm.
pub struct EnglishStemmer {
    inner: rust_stemmers::Stemmer,
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishStemmer").finish()
    }
}

impl EnglishStemmer {
    /// Create a new English Snowball stemmer.
    pub fn new() -> Self {
        EnglishStemmer {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

/// Identity stemmer that returns words unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
