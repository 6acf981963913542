//! Documents and the registry that issues their identifiers.
//!
//! A [`Document`] is a titled, ordered sequence of word tokens. Tokenization
//! happens upstream; this module receives word lists and offers in-place
//! normalization (stemming, stop word filtering) plus term-frequency lookup.
//!
//! Documents are created through a [`DocumentRegistry`], which owns the
//! monotonically increasing identifier counter. Constructing a fresh registry
//! resets identifier assignment, which keeps it testable.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::analysis::normalize::Normalizer;
use crate::analysis::stemmer::Stemmer;

/// Number of words shown by a document's `Display` rendering.
const PREVIEW_WORDS: usize = 5;

/// Issues document identifiers from a single incrementing counter.
///
/// The counter is owned here rather than living in global state, so tests can
/// start from a clean slate by constructing a new registry. Identifiers are
/// unique per registry and start at 1.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    next_id: AtomicU64,
}

impl DocumentRegistry {
    /// Create a new registry whose first document gets identifier 1.
    pub fn new() -> Self {
        DocumentRegistry {
            next_id: AtomicU64::new(0),
        }
    }

    /// Create a document from a word list.
    ///
    /// With no title, one is derived from the assigned identifier.
    pub fn create<I, S>(&self, title: Option<&str>, words: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let title = match title {
            Some(title) => title.to_string(),
            None => format!("(Untitled {id})"),
        };

        Document {
            id,
            title,
            words: words.into_iter().map(|w| w.into()).collect(),
        }
    }

    /// Create a document and normalize it immediately.
    ///
    /// The normalizer stems every word first and filters the exclude set
    /// second, so filtering operates on stemmed forms.
    pub fn create_normalized<I, S>(
        &self,
        title: Option<&str>,
        words: I,
        normalizer: &Normalizer,
    ) -> Document
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut document = self.create(title, words);
        document.normalize(normalizer);
        document
    }
}

/// A titled, ordered sequence of word tokens.
///
/// Duplicates are allowed and order matters for term-frequency counting.
/// The word sequence is mutable through the normalization operations; the
/// identifier and title are fixed at construction.
#[derive(Debug, Clone)]
pub struct Document {
    /// Identifier assigned by the registry, unique within it.
    id: u64,
    /// Display title. The TF-IDF matrix is keyed by this.
    title: String,
    /// The word sequence, in token order.
    words: Vec<String>,
}

impl Document {
    /// The registry-assigned identifier.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// View the word sequence as a slice.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the document has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Check whether `term` occurs in the word sequence.
    ///
    /// Stops scanning at the first match.
    pub fn contains(&self, term: &str) -> bool {
        self.words.iter().any(|word| word == term)
    }

    /// Remove every occurrence of any word present in `exclude`, in place.
    ///
    /// The relative order of the remaining words is preserved. Repeated
    /// calls are idempotent once no excluded word remains.
    pub fn filter_words(&mut self, exclude: &HashSet<String>) {
        self.words.retain(|word| !exclude.contains(word));
    }

    /// Replace every word with its stemmed form, in place.
    ///
    /// Positions and duplicate counts are preserved.
    pub fn stem_words(&mut self, stemmer: &dyn Stemmer) {
        for word in &mut self.words {
            *word = stemmer.stem(word);
        }
    }

    /// Stem, then filter, using the normalizer's stemmer and exclude set.
    pub fn normalize(&mut self, normalizer: &Normalizer) {
        self.stem_words(normalizer.stemmer());
        self.filter_words(normalizer.exclude());
    }

    /// Count the occurrences of `term` in the word sequence.
    ///
    /// Counts duplicates, not presence; 0 if the term is absent.
    pub fn tf(&self, term: &str) -> usize {
        self.words.iter().filter(|word| *word == term).count()
    }
}

/// Equality is by title and word sequence; identifiers don't participate.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.words == other.words
    }
}

impl Eq for Document {}

impl Hash for Document {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.words.hash(state);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:04}]: {} [", self.id, self.title)?;
        for word in self.words.iter().take(PREVIEW_WORDS) {
            write!(f, "{word}, ")?;
        }
        write!(f, "... ]")
    }
}
