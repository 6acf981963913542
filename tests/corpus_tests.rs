//! Integration tests for corpus construction and TF-IDF queries.

use xyston::analysis::Normalizer;
use xyston::corpus::{Corpus, CorpusConfig};
use xyston::document::{Document, DocumentRegistry};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn three_doc_corpus_input() -> Vec<Document> {
    let registry = DocumentRegistry::new();
    vec![
        registry.create(Some("doc1"), ["freedom", "liberty", "liberty"]),
        registry.create(Some("doc2"), ["liberty", "yelling", "crawled"]),
        registry.create(Some("doc3"), ["justice", "drugs", "oil"]),
    ]
}

#[test]
fn test_corpus_builds_all_derived_state() {
    let docs = three_doc_corpus_input();
    let corpus = Corpus::new(&docs).unwrap();

    assert_eq!(corpus.len(), 3);
    assert_eq!(corpus.terms().len(), 7);
    assert_eq!(corpus.dfs().len(), 7);
    assert_eq!(corpus.tf_idf().len(), 3);
}

#[test]
fn test_document_frequencies() {
    let docs = three_doc_corpus_input();
    let corpus = Corpus::new(&docs).unwrap();

    assert_eq!(corpus.dfs()["liberty"], 2);
    assert_eq!(corpus.dfs()["drugs"], 1);
    assert_eq!(corpus.dfs()["oil"], 1);
}

#[test]
fn test_tf_idf_score_for_unique_term() {
    let docs = three_doc_corpus_input();
    let corpus = Corpus::new(&docs).unwrap();

    // log10(1 + 1) * log10(3 / (1 + 1))
    let score = corpus.compute_tf_idf("oil", &docs[2]);
    assert_close(score, 0.053008750949996714);
}

#[test]
fn test_every_matrix_vector_spans_the_vocabulary() {
    let docs = three_doc_corpus_input();
    let corpus = Corpus::new(&docs).unwrap();

    for vector in corpus.tf_idf().values() {
        assert_eq!(vector.len(), corpus.terms().len());
    }
}

#[test]
fn test_single_document_corpus_is_degenerate() {
    let registry = DocumentRegistry::new();
    let docs = vec![registry.create(Some("alone"), ["taxes", "taxes", "tea"])];
    let corpus = Corpus::new(&docs).unwrap();

    for term in corpus.terms().keys() {
        assert_eq!(corpus.compute_tf_idf(term, &docs[0]), 0.0);
    }
}

#[test]
fn test_on_demand_vector_for_foreign_document() {
    let docs = three_doc_corpus_input();
    let corpus = Corpus::new(&docs).unwrap();

    // A document that was never part of the corpus can still be scored
    // against its vocabulary.
    let registry = DocumentRegistry::new();
    let foreign = registry.create(Some("foreign"), ["oil", "tankers"]);
    let vector = corpus.compute_tf_idf_vector(Some(&foreign), None).unwrap();

    assert_eq!(vector.len(), corpus.terms().len());
    let oil_index = corpus.terms()["oil"];
    assert!(vector.get(oil_index).unwrap() > 0.0);
}

#[test]
fn test_parallel_and_sequential_runs_agree() {
    let registry = DocumentRegistry::new();
    let docs: Vec<Document> = (0..16)
        .map(|i| {
            let words = vec![
                format!("term{}", i % 7),
                format!("term{}", (i * 3) % 11),
                "shared".to_string(),
                format!("term{}", i % 5),
            ];
            registry.create(Some(&format!("doc{i}")), words)
        })
        .collect();

    let sequential = Corpus::new(&docs).unwrap();
    let parallel = Corpus::with_config(&docs, CorpusConfig::parallel()).unwrap();

    assert_eq!(sequential.terms(), parallel.terms());
    assert_eq!(sequential.dfs(), parallel.dfs());
    assert_eq!(sequential.tf_idf(), parallel.tf_idf());
}

#[test]
fn test_end_to_end_similarity_ranking() {
    let normalizer = Normalizer::english();
    let registry = DocumentRegistry::new();
    let docs = vec![
        registry.create_normalized(
            Some("revolt"),
            ["the", "colonists", "were", "fleeing", "and", "yelling", "about", "taxes"],
            &normalizer,
        ),
        registry.create_normalized(
            Some("uprising"),
            ["yelling", "colonists", "protested", "the", "taxes"],
            &normalizer,
        ),
        registry.create_normalized(
            Some("harvest"),
            ["wheat", "barley", "and", "oats", "ripened"],
            &normalizer,
        ),
        registry.create_normalized(
            Some("orchard"),
            ["apples", "ripened", "on", "every", "branch"],
            &normalizer,
        ),
    ];

    let corpus = Corpus::new(&docs).unwrap();
    let revolt = &corpus.tf_idf()["revolt"];
    let uprising = &corpus.tf_idf()["uprising"];
    let harvest = &corpus.tf_idf()["harvest"];

    // Documents about taxes resemble each other more than the farm report.
    assert!(revolt.cossim(uprising) > revolt.cossim(harvest));
}

#[test]
fn test_debug_config_does_not_change_results() {
    let docs = three_doc_corpus_input();

    let quiet = Corpus::new(&docs).unwrap();
    let noisy = Corpus::with_config(&docs, CorpusConfig::default().debug(true)).unwrap();

    assert_eq!(quiet.tf_idf(), noisy.tf_idf());
}
