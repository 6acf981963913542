//! # Xyston
//!
//! A small vector space model library: TF-IDF weighting and cosine
//! similarity for document collections.
//!
//! Given a corpus of pre-tokenized documents (each a bag of words,
//! optionally stemmed and stop-word filtered), Xyston builds a shared term
//! vocabulary, computes per-term document frequencies, and produces one
//! TF-IDF vector per document, assembled into a title-keyed matrix.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable stemming through the [`Stemmer`](analysis::Stemmer) capability
//! - Stop word filtering with a default English list
//! - Optional parallel corpus construction on a bounded worker pool
//!
//! ## Example
//!
//! ```
//! use xyston::analysis::Normalizer;
//! use xyston::corpus::Corpus;
//! use xyston::document::DocumentRegistry;
//!
//! let normalizer = Normalizer::english();
//! let registry = DocumentRegistry::new();
//! let docs = vec![
//!     registry.create_normalized(
//!         Some("common sense"),
//!         ["the", "cause", "of", "america", "is", "the", "cause", "of", "mankind"],
//!         &normalizer,
//!     ),
//!     registry.create_normalized(
//!         Some("the crisis"),
//!         ["these", "are", "the", "times", "that", "try", "mens", "souls"],
//!         &normalizer,
//!     ),
//! ];
//!
//! let corpus = Corpus::new(&docs).unwrap();
//! let a = &corpus.tf_idf()["common sense"];
//! let b = &corpus.tf_idf()["the crisis"];
//! println!("similarity: {}", a.cossim(b));
//! ```

pub mod analysis;
pub mod corpus;
pub mod document;
pub mod error;
pub mod vector;

mod parallel;

pub use analysis::{EnglishStemmer, IdentityStemmer, Normalizer, Stemmer};
pub use corpus::{Corpus, CorpusConfig};
pub use document::{Document, DocumentRegistry};
pub use error::{Result, XystonError};
pub use vector::Vector;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
