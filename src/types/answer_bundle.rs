use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ranking::StatisticsError;
use crate::text::tokenize;

/// A normalized query.
/// Normalization rules:
/// - Same tokenizer as the corpus (lowercase, punctuation and stopwords removed)
/// - Duplicates collapse, order is irrelevant
/// - An empty term set is valid (every candidate scores 0)
#[derive(Debug, Clone)]
pub struct Query {
    pub raw: String,
    pub terms: BTreeSet<String>,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let terms = tokenize(&raw).into_inner().into_iter().collect();

        Self { raw, terms }
    }

    /// Build a query from already-normalized terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: BTreeSet<String> = terms.into_iter().map(Into::into).collect();
        let raw = terms.iter().cloned().collect::<Vec<_>>().join(" ");

        Self { raw, terms }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// A document chosen in the first ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub id: String,
    pub version: String,
    pub score: f64,
}

/// A sentence chosen in the second ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSentence {
    pub text: String,
    pub idf_score: f64,
    pub density: f64,
}

/// Counters describing what the answer was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerSummary {
    pub corpus_fingerprint: String,
    pub documents_considered: usize,
    pub sentences_considered: usize,
}

/// The final result of answering one query.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub query: String,
    pub query_terms: Vec<String>,
    pub documents: Vec<RankedDocument>,
    pub sentences: Vec<RankedSentence>,
    pub summary: AnswerSummary,
}

impl Answer {
    /// Best sentence, if the top documents held any scorable sentence.
    pub fn best(&self) -> Option<&str> {
        self.sentences.first().map(|s| s.text.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("Sentence statistics failed: {0}")]
    Statistics(#[from] StatisticsError),
}
