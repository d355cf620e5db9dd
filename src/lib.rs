//! Deterministic TF-IDF question answering over a fixed text corpus.
//!
//! `corpus-qa` tokenizes a corpus, ranks its documents against a query by
//! TF-IDF, then ranks the sentences of the best documents by summed query-term
//! IDF with a query-density tiebreak. Every ranking uses an explicit total
//! order, so identical inputs always produce identical answers, byte-for-byte.

pub mod config;
pub mod corpus;
pub mod document;
pub mod engine;
pub mod ranking;
pub mod text;
pub mod types;

pub use config::EngineConfig;
pub use corpus::{load_directory, CorpusIndex};
pub use engine::AnswerEngine;
pub use ranking::{compute_idf, rank_documents, rank_sentences, IdfTable};
pub use text::tokenize;
pub use types::{Answer, Query, TokenSequence};
