//! Corpus construction and TF-IDF scoring.
//!
//! A [`Corpus`] borrows an ordered list of documents and derives three data
//! structures at construction time: the shared term vocabulary, per-term
//! document frequencies, and the title-keyed TF-IDF matrix. None of them is
//! recomputed afterwards; the corpus is read-only once built.
//!
//! The document-frequency and matrix phases can optionally fan out across a
//! bounded worker pool (see [`CorpusConfig::workers`]); the content of the
//! results is identical either way, only wall-clock behavior differs.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::document::Document;
use crate::error::{Result, XystonError};
use crate::parallel::compute_keyed;
use crate::vector::Vector;

/// Configuration for corpus construction.
///
/// # Examples
///
/// ```
/// use xyston::corpus::CorpusConfig;
///
/// let sequential = CorpusConfig::default();
/// assert_eq!(sequential.workers, 1);
///
/// let parallel = CorpusConfig::default().workers(8).debug(true);
/// assert_eq!(parallel.workers, 8);
/// ```
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    /// Number of worker threads for the document-frequency and matrix
    /// phases. 1 means strictly sequential execution.
    pub workers: usize,
    /// Emit progress lines while computing.
    pub debug: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        CorpusConfig {
            workers: 1,
            debug: false,
        }
    }
}

impl CorpusConfig {
    /// Create a config with sequential execution and no debug output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that uses one worker per available CPU.
    pub fn parallel() -> Self {
        CorpusConfig {
            workers: num_cpus::get(),
            ..Self::default()
        }
    }

    /// Set the worker count.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Enable or disable progress output.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// A fixed collection of documents with its derived TF-IDF state.
///
/// The corpus borrows the document list; documents are read-only for its
/// lifetime. The TF-IDF matrix is keyed by document title; duplicate titles
/// silently overwrite each other.
///
/// # Examples
///
/// ```
/// use xyston::corpus::Corpus;
/// use xyston::document::DocumentRegistry;
///
/// let registry = DocumentRegistry::new();
/// let docs = vec![
///     registry.create(Some("common sense"), ["liberty", "taxes"]),
///     registry.create(Some("the crisis"), ["liberty", "tyranny"]),
/// ];
///
/// let corpus = Corpus::new(&docs).unwrap();
/// let a = &corpus.tf_idf()["common sense"];
/// let b = &corpus.tf_idf()["the crisis"];
/// let _similarity = a.cossim(b);
/// ```
#[derive(Debug)]
pub struct Corpus<'a> {
    /// The documents, in caller order.
    docs: &'a [Document],
    config: CorpusConfig,
    /// Term to vector-index mapping, shared by every vector in the matrix.
    terms: HashMap<String, usize>,
    /// Per-term document frequency.
    dfs: HashMap<String, usize>,
    /// Title-keyed TF-IDF matrix.
    tf_idf: HashMap<String, Vector>,
}

impl<'a> Corpus<'a> {
    /// Build a corpus with the default configuration (sequential, quiet).
    pub fn new(docs: &'a [Document]) -> Result<Self> {
        Self::with_config(docs, CorpusConfig::default())
    }

    /// Build a corpus with an explicit configuration.
    ///
    /// The vocabulary, document frequencies, and TF-IDF matrix are all
    /// computed before this returns.
    pub fn with_config(docs: &'a [Document], config: CorpusConfig) -> Result<Self> {
        let mut corpus = Corpus {
            docs,
            config,
            terms: HashMap::new(),
            dfs: HashMap::new(),
            tf_idf: HashMap::new(),
        };

        corpus.terms = corpus.compute_terms();
        corpus.dfs = corpus.compute_dfs()?;
        corpus.tf_idf = corpus.compute_tf_idf_matrix()?;

        Ok(corpus)
    }

    /// The documents, in caller order.
    pub fn docs(&self) -> &[Document] {
        self.docs
    }

    /// The term to vector-index mapping.
    ///
    /// Indexes are self-consistent within this corpus instance but carry no
    /// meaning across instances.
    pub fn terms(&self) -> &HashMap<String, usize> {
        &self.terms
    }

    /// The per-term document frequencies.
    pub fn dfs(&self) -> &HashMap<String, usize> {
        &self.dfs
    }

    /// The TF-IDF matrix, keyed by document title.
    pub fn tf_idf(&self) -> &HashMap<String, Vector> {
        &self.tf_idf
    }

    /// Get the number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate over the documents in order.
    pub fn iter(&self) -> std::slice::Iter<'a, Document> {
        self.docs.iter()
    }

    /// Get the document at `index`.
    ///
    /// Returns an out-of-range error when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&'a Document> {
        self.docs
            .get(index)
            .ok_or_else(|| XystonError::out_of_range(format!("document index out of range: {index}")))
    }

    /// Compute the vocabulary: every distinct word across all documents,
    /// each assigned a zero-based index.
    ///
    /// The vocabulary is sorted before index assignment, so the mapping is
    /// reproducible for a given document list.
    fn compute_terms(&self) -> HashMap<String, usize> {
        let mut vocabulary = BTreeSet::new();
        for doc in self.docs {
            for word in doc {
                vocabulary.insert(word.clone());
            }
        }

        vocabulary
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term, index))
            .collect()
    }

    /// Compute the document frequency of `term`: the number of documents in
    /// which it occurs at least once.
    ///
    /// Presence, not frequency: each document is scanned only until the
    /// first match.
    fn compute_df(&self, term: &str) -> usize {
        if self.config.debug {
            debug!("Computing document frequency for term '{term}'");
        }

        self.docs.iter().filter(|doc| doc.contains(term)).count()
    }

    /// Compute document frequencies for every term in the vocabulary.
    fn compute_dfs(&self) -> Result<HashMap<String, usize>> {
        if self.config.workers > 1 {
            compute_keyed(
                self.config.workers,
                self.terms.keys().collect(),
                |term| Ok(self.compute_df(term)),
                |term| term.to_string(),
            )
        } else {
            Ok(self
                .terms
                .keys()
                .map(|term| (term.clone(), self.compute_df(term)))
                .collect())
        }
    }

    /// Compute the TF-IDF score of `term` for `doc`.
    ///
    /// The score is `log10(1 + tf) * log10(doc_count / (1 + df))`. It is 0.0
    /// when the term does not occur in the document, and 0.0 for every term
    /// of a single-document corpus: with one document the inverse document
    /// frequency carries no information, so no term scores above any other.
    pub fn compute_tf_idf(&self, term: &str, doc: &Document) -> f64 {
        if !doc.contains(term) || self.docs.len() < 2 {
            return 0.0;
        }

        let tf = doc.tf(term) as f64;
        let df = self.dfs.get(term).copied().unwrap_or(0) as f64;
        let doc_count = self.docs.len() as f64;

        (1.0 + tf).log10() * (doc_count / (1.0 + df)).log10()
    }

    /// Compute the TF-IDF vector for a document, independent of the cached
    /// matrix.
    ///
    /// Exactly one of `doc` and `index` must be supplied: a document passed
    /// directly, or a position in this corpus's document list. The returned
    /// vector has one element per vocabulary term, at the term's assigned
    /// index.
    pub fn compute_tf_idf_vector(
        &self,
        doc: Option<&Document>,
        index: Option<usize>,
    ) -> Result<Vector> {
        let doc = self.resolve_document(doc, index)?;
        if self.config.debug {
            debug!("Computing TF-IDF vector for '{}'", doc.title());
        }

        let mut elements = vec![0.0; self.terms.len()];
        for (term, &term_index) in &self.terms {
            elements[term_index] = self.compute_tf_idf(term, doc);
        }

        Ok(Vector::new(elements))
    }

    /// Compute one TF-IDF vector per document, keyed by title.
    fn compute_tf_idf_matrix(&self) -> Result<HashMap<String, Vector>> {
        if self.config.workers > 1 {
            compute_keyed(
                self.config.workers,
                self.docs.iter().collect(),
                |doc| self.compute_tf_idf_vector(Some(doc), None),
                |doc| doc.title().to_string(),
            )
        } else {
            let mut matrix = HashMap::new();
            for doc in self.docs {
                let vector = self.compute_tf_idf_vector(Some(doc), None)?;
                matrix.insert(doc.title().to_string(), vector);
            }
            Ok(matrix)
        }
    }

    /// Resolve the document to operate on from either a direct reference or
    /// a position in the corpus's document list.
    fn resolve_document<'b>(
        &'b self,
        doc: Option<&'b Document>,
        index: Option<usize>,
    ) -> Result<&'b Document> {
        match (doc, index) {
            (Some(doc), None) => Ok(doc),
            (None, Some(index)) => self.get(index),
            (None, None) => Err(XystonError::invalid_argument(
                "either a document or an index is required",
            )),
            (Some(_), Some(_)) => Err(XystonError::invalid_argument(
                "pass a document or an index, not both",
            )),
        }
    }
}

impl<'a, 'b> IntoIterator for &'b Corpus<'a> {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
