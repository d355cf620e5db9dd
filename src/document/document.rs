use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One corpus file: its id (file name), the path it was read from and its text.
///
/// The text is only ever read: tokenized for the document pass and split into
/// sentences when the document ranks among the top matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub source: String,
    pub content: String,
}

impl Document {
    /// Build a document from the bytes of a corpus file.
    ///
    /// Non-UTF-8 files are rejected rather than decoded lossily, so a corpus
    /// answers the same way on every platform.
    pub fn ingest(
        id: DocumentId,
        source: String,
        raw_content: Vec<u8>,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        let version = DocumentVersion::from_content(content.as_bytes());

        Ok(Document {
            id,
            version,
            source,
            content,
        })
    }

    /// Build a document from in-memory text; the source is the id itself.
    pub fn from_text(id: impl Into<String>, content: impl Into<String>) -> Self {
        let id = DocumentId::new(id);
        let content = content.into();
        let version = DocumentVersion::from_content(content.as_bytes());

        Document {
            source: id.as_str().to_string(),
            id,
            version,
            content,
        }
    }
}
