//! Corpus statistics: inverse document frequency.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::types::TokenSequence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatisticsError {
    #[error("Cannot compute IDF over an empty corpus")]
    EmptyCorpus,
}

/// Token → `ln(N / df)` for one corpus.
///
/// A token missing from the table never occurred in that corpus; this is
/// distinct from a token present with IDF `0.0` (it occurs in every document).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdfTable {
    document_count: usize,
    entries: BTreeMap<String, f64>,
}

impl IdfTable {
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Number of documents the table was computed over.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(token, idf)| (token.as_str(), *idf))
    }
}

/// Compute IDF for every token that appears in at least one document.
///
/// Document frequency counts presence, not occurrences.
pub fn compute_idf<K>(corpus: &BTreeMap<K, TokenSequence>) -> Result<IdfTable, StatisticsError> {
    if corpus.is_empty() {
        return Err(StatisticsError::EmptyCorpus);
    }

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in corpus.values() {
        let distinct: BTreeSet<&str> = tokens.distinct();
        for token in distinct {
            *document_frequency.entry(token).or_insert(0) += 1;
        }
    }

    let total = corpus.len() as f64;
    let entries: BTreeMap<String, f64> = document_frequency
        .into_iter()
        .map(|(token, df)| (token.to_string(), (total / df as f64).ln()))
        .collect();

    debug!(documents = corpus.len(), vocabulary = entries.len(), "computed idf table");

    Ok(IdfTable {
        document_count: corpus.len(),
        entries,
    })
}
