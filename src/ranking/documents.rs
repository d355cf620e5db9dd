//! Document ranking by summed term frequency × IDF.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::ranking::idf::IdfTable;
use crate::ranking::score_each;
use crate::ranking::topk::smallest_k;
use crate::types::TokenSequence;

/// A document and its TF-IDF score against one query.
///
/// Orders best-first: score descending, then id ascending.
#[derive(Debug, Clone)]
pub struct DocumentScore<K> {
    pub id: K,
    pub score: f64,
}

impl<K: Ord> Ord for DocumentScore<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl<K: Ord> PartialOrd for DocumentScore<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for DocumentScore<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for DocumentScore<K> {}

/// Σ tf(term) × idf(term) over query terms known to `idf`.
///
/// Terms absent from the table contribute nothing; the score is never `-0.0`.
pub fn score_document(query: &BTreeSet<String>, tokens: &TokenSequence, idf: &IdfTable) -> f64 {
    query
        .iter()
        .filter_map(|term| idf.get(term).map(|weight| tokens.term_frequency(term) as f64 * weight))
        .fold(0.0, |acc, weight| acc + weight)
}

/// Every document scored, best first, truncated to `n`.
///
/// Documents without any query term score 0 and still take part, so the
/// result always holds `min(n, corpus.len())` entries.
pub fn top_documents<K>(
    query: &BTreeSet<String>,
    corpus: &BTreeMap<K, TokenSequence>,
    idf: &IdfTable,
    n: usize,
) -> Vec<DocumentScore<K>>
where
    K: Ord + Clone + Send + Sync,
{
    let scored = score_each(corpus, |id, tokens| DocumentScore {
        id: id.clone(),
        score: score_document(query, tokens, idf),
    });

    smallest_k(scored, n)
}

/// Ids of the `n` best documents for `query`.
pub fn rank_documents<K>(
    query: &BTreeSet<String>,
    corpus: &BTreeMap<K, TokenSequence>,
    idf: &IdfTable,
    n: usize,
) -> Vec<K>
where
    K: Ord + Clone + Send + Sync,
{
    top_documents(query, corpus, idf, n)
        .into_iter()
        .map(|scored| scored.id)
        .collect()
}
