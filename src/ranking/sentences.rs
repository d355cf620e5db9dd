//! Sentence ranking by matched-term IDF, tie-broken by query-term density.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use crate::ranking::idf::IdfTable;
use crate::ranking::score_each;
use crate::ranking::topk::smallest_k;
use crate::types::TokenSequence;

/// A sentence with both of its ranking keys.
#[derive(Debug, Clone)]
pub struct SentenceScore<K> {
    pub sentence: K,
    pub idf_score: f64,
    pub density: f64,
}

/// Total best-first order: `idf_score` desc, `density` desc, sentence asc.
pub fn compare_sentences<K: Ord>(a: &SentenceScore<K>, b: &SentenceScore<K>) -> Ordering {
    b.idf_score
        .total_cmp(&a.idf_score)
        .then_with(|| b.density.total_cmp(&a.density))
        .then_with(|| a.sentence.cmp(&b.sentence))
}

impl<K: Ord> Ord for SentenceScore<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_sentences(self, other)
    }
}

impl<K: Ord> PartialOrd for SentenceScore<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for SentenceScore<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for SentenceScore<K> {}

/// Σ idf(term) over distinct query terms present in the sentence.
///
/// Membership only; repeated occurrences add nothing. Terms absent from the
/// table contribute 0. Folds from `+0.0` so a sentence with no known term
/// ties exactly with one whose terms all have IDF 0.
pub fn idf_score(query: &BTreeSet<String>, tokens: &TokenSequence, idf: &IdfTable) -> f64 {
    query
        .iter()
        .filter(|term| tokens.contains(term))
        .filter_map(|term| idf.get(term))
        .fold(0.0, |acc, weight| acc + weight)
}

/// Fraction of the sentence's tokens that are query terms. `None` when empty.
pub fn query_density(query: &BTreeSet<String>, tokens: &TokenSequence) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let matches = tokens.iter().filter(|token| query.contains(*token)).count();
    Some(matches as f64 / tokens.len() as f64)
}

/// Scored sentences, best first, truncated to `n`.
///
/// Sentences with no tokens have no density and never enter the pool.
pub fn top_sentences<K>(
    query: &BTreeSet<String>,
    sentences: &BTreeMap<K, TokenSequence>,
    idf: &IdfTable,
    n: usize,
) -> Vec<SentenceScore<K>>
where
    K: Ord + Clone + Send + Sync,
{
    let scored = score_each(sentences, |sentence, tokens| {
        query_density(query, tokens).map(|density| SentenceScore {
            sentence: sentence.clone(),
            idf_score: idf_score(query, tokens, idf),
            density,
        })
    });

    smallest_k(scored.into_iter().flatten(), n)
}

/// The `n` best sentences for `query`.
pub fn rank_sentences<K>(
    query: &BTreeSet<String>,
    sentences: &BTreeMap<K, TokenSequence>,
    idf: &IdfTable,
    n: usize,
) -> Vec<K>
where
    K: Ord + Clone + Send + Sync,
{
    top_sentences(query, sentences, idf, n)
        .into_iter()
        .map(|scored| scored.sentence)
        .collect()
}
