// Read-only once built:
// no mutation
// no incremental updates

use std::collections::BTreeMap;

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::document::{Document, DocumentId};
use crate::ranking::{compute_idf, IdfTable, StatisticsError};
use crate::text::tokenize;
use crate::types::TokenSequence;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
    #[error("Duplicate document ID: {0}")]
    DuplicateDocumentId(String),
}

/// Documents, their token sequences and the document-level IDF table.
#[derive(Debug)]
pub struct CorpusIndex {
    documents: BTreeMap<DocumentId, Document>,
    tokens: BTreeMap<DocumentId, TokenSequence>,
    idf: IdfTable,
    fingerprint: String,
}

impl CorpusIndex {
    pub fn build(documents: Vec<Document>) -> Result<Self, IndexError> {
        let mut by_id = BTreeMap::new();
        for doc in documents {
            if by_id.contains_key(&doc.id) {
                return Err(IndexError::DuplicateDocumentId(doc.id.as_str().to_string()));
            }
            by_id.insert(doc.id.clone(), doc);
        }

        let tokens: BTreeMap<DocumentId, TokenSequence> = by_id
            .iter()
            .map(|(id, doc)| (id.clone(), tokenize(&doc.content)))
            .collect();

        let idf = compute_idf(&tokens)?;

        // sorted("id:version") lines, as the ids are BTreeMap keys
        let mut hasher = Sha256::new();
        for doc in by_id.values() {
            let line = format!("{}:{}\n", doc.id.as_str(), doc.version.as_str());
            hasher.update(line.as_bytes());
        }
        let fingerprint = format!("sha256:{}", hex::encode(hasher.finalize()));

        debug!(
            documents = by_id.len(),
            vocabulary = idf.len(),
            fingerprint = %fingerprint,
            "built corpus index"
        );

        Ok(Self {
            documents: by_id,
            tokens,
            idf,
            fingerprint,
        })
    }

    pub fn document(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.documents.values()
    }

    pub fn tokens(&self) -> &BTreeMap<DocumentId, TokenSequence> {
        &self.tokens
    }

    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }

    /// `sha256:` over the sorted `id:version` lines of the corpus.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
