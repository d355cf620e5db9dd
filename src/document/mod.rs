pub mod document;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::{Document, DocumentError};
