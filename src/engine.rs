//! The two-pass answer pipeline: rank documents, then rank the sentences of
//! the winners against IDF recomputed over those sentences.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::corpus::CorpusIndex;
use crate::document::Document;
use crate::ranking::{compare_sentences, compute_idf, top_documents, top_sentences, SentenceScore};
use crate::text::{split_sentences, tokenize};
use crate::types::{
    Answer, AnswerError, AnswerSummary, Query, RankedDocument, RankedSentence, TokenSequence,
};

pub struct AnswerEngine {
    config: EngineConfig,
}

impl Default for AnswerEngine {
    fn default() -> Self {
        Self {
            config: EngineConfig::v0(),
        }
    }
}

impl AnswerEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn answer(&self, index: &CorpusIndex, query: &Query) -> Result<Answer, AnswerError> {
        // 1. Document pass
        let top_docs: Vec<(&Document, f64)> = top_documents(
            &query.terms,
            index.tokens(),
            index.idf(),
            self.config.file_matches,
        )
        .into_iter()
        .filter_map(|scored| index.document(&scored.id).map(|doc| (doc, scored.score)))
        .collect();

        debug!(
            query = %query.raw,
            terms = query.terms.len(),
            documents = top_docs.len(),
            "ranked documents"
        );

        // 2. Sentence extraction, first occurrence of a sentence wins
        let sentences = collect_sentences(top_docs.iter().map(|(doc, _)| *doc));

        // 3. Sentence pass over its own statistics
        let ranked = if sentences.is_empty() {
            warn!(query = %query.raw, "top documents contain no scorable sentence");
            Vec::new()
        } else {
            let idf = compute_idf(&sentences)?;
            top_sentences(&query.terms, &sentences, &idf, self.config.sentence_matches)
        };

        debug_assert!(ranked
            .windows(2)
            .all(|w| compare_sentences(&w[0], &w[1]).is_lt()));

        debug!(
            sentences_considered = sentences.len(),
            sentences_selected = ranked.len(),
            "ranked sentences"
        );

        Ok(Answer {
            query: query.raw.clone(),
            query_terms: query.terms.iter().cloned().collect(),
            documents: top_docs
                .iter()
                .map(|(doc, score)| RankedDocument {
                    id: doc.id.as_str().to_string(),
                    version: doc.version.as_str().to_string(),
                    score: *score,
                })
                .collect(),
            sentences: ranked.into_iter().map(ranked_sentence).collect(),
            summary: AnswerSummary {
                corpus_fingerprint: index.fingerprint().to_string(),
                documents_considered: index.len(),
                sentences_considered: sentences.len(),
            },
        })
    }
}

/// Sentence text → tokens for every sentence with at least one content word.
pub fn collect_sentences<'a>(
    documents: impl IntoIterator<Item = &'a Document>,
) -> BTreeMap<String, TokenSequence> {
    let mut sentences = BTreeMap::new();
    for doc in documents {
        for sentence in split_sentences(&doc.content) {
            let tokens = tokenize(&sentence);
            if !tokens.is_empty() {
                sentences.entry(sentence).or_insert(tokens);
            }
        }
    }
    sentences
}

fn ranked_sentence(scored: SentenceScore<String>) -> RankedSentence {
    RankedSentence {
        text: scored.sentence,
        idf_score: scored.idf_score,
        density: scored.density,
    }
}
