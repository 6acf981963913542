//! Document normalization pipeline.

use std::collections::HashSet;

use crate::analysis::stemmer::{EnglishStemmer, Stemmer};
use crate::analysis::stop::DEFAULT_ENGLISH_STOP_WORDS_SET;

/// An exclude-word set paired with a stemmer.
///
/// Applied to a document, a normalizer stems every word first and filters the
/// exclude set second, so filtering operates on stemmed forms. The stemmer
/// held here is the one that runs; no other stemmer is substituted.
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
///
/// use xyston::analysis::{IdentityStemmer, Normalizer};
/// use xyston::document::DocumentRegistry;
///
/// let exclude: HashSet<String> = ["the".to_string()].into();
/// let normalizer = Normalizer::new(exclude, Box::new(IdentityStemmer::new()));
///
/// let registry = DocumentRegistry::new();
/// let doc = registry.create_normalized(Some("pamphlet"), ["the", "crisis"], &normalizer);
/// assert_eq!(doc.words(), ["crisis"]);
/// ```
pub struct Normalizer {
    /// Words removed from documents after stemming.
    exclude: HashSet<String>,
    /// The stemmer applied to every word.
    stemmer: Box<dyn Stemmer>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("exclude_words", &self.exclude.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl Normalizer {
    /// Create a normalizer from an exclude set and a stemmer.
    pub fn new(exclude: HashSet<String>, stemmer: Box<dyn Stemmer>) -> Self {
        Normalizer { exclude, stemmer }
    }

    /// Create a normalizer with the default English stop words and the
    /// English Snowball stemmer.
    pub fn english() -> Self {
        Normalizer {
            exclude: DEFAULT_ENGLISH_STOP_WORDS_SET.clone(),
            stemmer: Box::new(EnglishStemmer::new()),
        }
    }

    /// The exclude-word set.
    pub fn exclude(&self) -> &HashSet<String> {
        &self.exclude
    }

    /// The stemmer applied to every word.
    pub fn stemmer(&self) -> &dyn Stemmer {
        self.stemmer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::stemmer::IdentityStemmer;

    #[test]
    fn test_normalizer_accessors() {
        let exclude: HashSet<String> = ["justice".to_string()].into();
        let normalizer = Normalizer::new(exclude, Box::new(IdentityStemmer::new()));

        assert!(normalizer.exclude().contains("justice"));
        assert_eq!(normalizer.stemmer().name(), "identity");
    }

    #[test]
    fn test_english_normalizer_defaults() {
        let normalizer = Normalizer::english();

        assert!(normalizer.exclude().contains("the"));
        assert_eq!(normalizer.stemmer().name(), "english");
        assert_eq!(normalizer.stemmer().stem("fleeing"), "flee");
    }
}
