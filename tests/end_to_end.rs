use std::fs;

use corpus_qa::corpus::{load_directory, CorpusIndex, IndexError, LoadError};
use corpus_qa::engine::AnswerEngine;
use corpus_qa::ranking::StatisticsError;
use corpus_qa::types::Query;
use corpus_qa::EngineConfig;
use tempfile::tempdir;

fn write_corpus(dir: &std::path::Path) {
    fs::write(
        dir.join("python.txt"),
        "Python is an interpreted, high-level programming language.\n\
         Guido van Rossum began working on Python in the late 1980s. \
         Python was first released in 1991.",
    )
    .unwrap();
    fs::write(
        dir.join("Neural_Network.txt"),
        "A neural network is a network of artificial neurons. \
         Neural networks learn by adjusting weights.\n\
         Backpropagation computes the gradient of the loss.",
    )
    .unwrap();
    fs::write(
        dir.join("probability.txt"),
        "Probability is the branch of mathematics concerning events. \
         The probability of an event is a number between 0 and 1.",
    )
    .unwrap();
    fs::write(dir.join("notes.md"), "Python python python.").unwrap();
}

#[test]
fn end_to_end_answers_question_from_directory() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let docs = load_directory(dir.path()).unwrap();
    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["Neural_Network.txt", "probability.txt", "python.txt"]);

    let index = CorpusIndex::build(docs).unwrap();
    let answer = AnswerEngine::default()
        .answer(&index, &Query::new("When was Python first released?"))
        .unwrap();

    assert_eq!(answer.documents[0].id, "python.txt");
    assert_eq!(answer.best(), Some("Python was first released in 1991."));
    assert_eq!(answer.query_terms, vec!["first", "python", "released"]);
    assert_eq!(answer.summary.documents_considered, 3);
    assert_eq!(answer.summary.corpus_fingerprint, index.fingerprint());
}

#[test]
fn end_to_end_more_matches_widen_the_answer() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());

    let index = CorpusIndex::build(load_directory(dir.path()).unwrap()).unwrap();
    let engine = AnswerEngine::new(EngineConfig {
        file_matches: 2,
        sentence_matches: 3,
    })
    .unwrap();
    let answer = engine
        .answer(&index, &Query::new("How do neural networks learn?"))
        .unwrap();

    assert_eq!(answer.documents.len(), 2);
    assert_eq!(answer.documents[0].id, "Neural_Network.txt");
    assert_eq!(answer.sentences.len(), 3);
    assert_eq!(answer.best(), Some("Neural networks learn by adjusting weights."));
}

#[test]
fn end_to_end_empty_directory_is_configuration_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "not part of the corpus").unwrap();

    let docs = load_directory(dir.path()).unwrap();
    assert!(docs.is_empty());
    assert!(matches!(
        CorpusIndex::build(docs),
        Err(IndexError::Statistics(StatisticsError::EmptyCorpus))
    ));
}

#[test]
fn end_to_end_invalid_utf8_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.txt"), [0u8, 159, 146, 150]).unwrap();

    assert!(matches!(
        load_directory(dir.path()),
        Err(LoadError::Document { .. })
    ));
}

#[test]
fn end_to_end_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    assert!(matches!(load_directory(&missing), Err(LoadError::Io { .. })));
}

#[test]
fn end_to_end_config_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "file_matches": 2 }"#).unwrap();

    let config = EngineConfig::from_json_file(&path).unwrap();
    assert_eq!(config.file_matches, 2);
    assert_eq!(config.sentence_matches, 1);

    fs::write(&path, r#"{ "file_matches": 0 }"#).unwrap();
    assert!(EngineConfig::from_json_file(&path).is_err());
}

#[test]
fn end_to_end_names_differing_only_in_case_are_separate_documents() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Notes.txt"), "Rust compiles ahead of time.").unwrap();
    fs::write(dir.path().join("notes.txt"), "Python is interpreted.").unwrap();

    let docs = load_directory(dir.path()).unwrap();
    // case-insensitive filesystems keep only one of the two files
    if docs.len() < 2 {
        return;
    }
    let ids: Vec<&str> = docs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["Notes.txt", "notes.txt"]);

    let index = CorpusIndex::build(docs).unwrap();
    assert_eq!(index.len(), 2);

    let answer = AnswerEngine::default()
        .answer(&index, &Query::new("Is Python interpreted?"))
        .unwrap();
    assert_eq!(answer.documents[0].id, "notes.txt");
    assert_eq!(answer.best(), Some("Python is interpreted."));
}
