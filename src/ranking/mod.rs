//! The ranking core: corpus statistics plus the two rankers.

pub mod documents;
pub mod idf;
pub mod sentences;
pub mod topk;

use std::collections::BTreeMap;

pub use documents::{rank_documents, score_document, top_documents, DocumentScore};
pub use idf::{compute_idf, IdfTable, StatisticsError};
pub use sentences::{
    compare_sentences, idf_score, query_density, rank_sentences, top_sentences, SentenceScore,
};
pub use topk::smallest_k;

/// Apply `score` to every entry. Parallel under the `parallel` feature; the
/// caller imposes a total order afterwards, so results do not depend on it.
#[cfg(feature = "parallel")]
pub(crate) fn score_each<K, V, T, F>(entries: &BTreeMap<K, V>, score: F) -> Vec<T>
where
    K: Ord + Sync,
    V: Sync,
    T: Send,
    F: Fn(&K, &V) -> T + Sync + Send,
{
    use rayon::prelude::*;
    entries.par_iter().map(|(key, value)| score(key, value)).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn score_each<K, V, T, F>(entries: &BTreeMap<K, V>, score: F) -> Vec<T>
where
    K: Ord,
    F: Fn(&K, &V) -> T,
{
    entries.iter().map(|(key, value)| score(key, value)).collect()
}
