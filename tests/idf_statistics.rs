use std::collections::BTreeMap;

use corpus_qa::ranking::{compute_idf, StatisticsError};
use corpus_qa::types::TokenSequence;

fn seq(words: &[&str]) -> TokenSequence {
    words.iter().copied().collect()
}

#[test]
fn invariant_idf_is_log_of_inverse_document_share() {
    let mut corpus = BTreeMap::new();
    corpus.insert("one", seq(&["x", "y"]));
    corpus.insert("two", seq(&["x"]));

    let idf = compute_idf(&corpus).unwrap();

    assert_eq!(idf.get("x"), Some(0.0));
    let y = idf.get("y").unwrap();
    assert!((y - 2f64.ln()).abs() < 1e-12);
    assert!((y - 0.693).abs() < 1e-3);
}

#[test]
fn invariant_every_corpus_token_has_an_entry() {
    let mut corpus = BTreeMap::new();
    corpus.insert("a", seq(&["alpha", "beta", "beta"]));
    corpus.insert("b", seq(&["gamma"]));
    corpus.insert("c", seq(&["alpha", "delta"]));

    let idf = compute_idf(&corpus).unwrap();

    for tokens in corpus.values() {
        for token in tokens.iter() {
            assert!(idf.contains(token), "{token} missing from idf table");
        }
    }
    assert_eq!(idf.len(), 4);
}

#[test]
fn invariant_absent_and_zero_idf_are_distinguishable() {
    let mut corpus = BTreeMap::new();
    corpus.insert("a", seq(&["common"]));
    corpus.insert("b", seq(&["common"]));

    let idf = compute_idf(&corpus).unwrap();

    assert_eq!(idf.get("common"), Some(0.0));
    assert_eq!(idf.get("never"), None);
}

#[test]
fn invariant_rarer_tokens_weigh_more() {
    let mut corpus = BTreeMap::new();
    corpus.insert("a", seq(&["rare", "common"]));
    corpus.insert("b", seq(&["common", "medium"]));
    corpus.insert("c", seq(&["common", "medium"]));
    corpus.insert("d", seq(&["other"]));

    let idf = compute_idf(&corpus).unwrap();
    let rare = idf.get("rare").unwrap();
    let medium = idf.get("medium").unwrap();
    let common = idf.get("common").unwrap();

    assert!(rare > medium);
    assert!(medium > common);
    assert!(common >= 0.0);
}

#[test]
fn invariant_empty_corpus_is_configuration_error() {
    let corpus: BTreeMap<String, TokenSequence> = BTreeMap::new();
    assert_eq!(compute_idf(&corpus).unwrap_err(), StatisticsError::EmptyCorpus);
}
