use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::document::{Document, DocumentError, DocumentId};
use crate::types::DocumentIdError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid document {path}: {source}")]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
    #[error("Invalid document path {path}: {source}")]
    DocumentId {
        path: PathBuf,
        #[source]
        source: DocumentIdError,
    },
}

/// Load every `.txt` file directly inside `dir`, in path order.
pub fn load_directory(dir: &Path) -> Result<Vec<Document>, LoadError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| LoadError::Io { path, source }
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let raw = fs::read(&path).map_err(io_err(&path))?;
        let id = DocumentId::from_path(dir, &path).map_err(|source| LoadError::DocumentId {
            path: path.clone(),
            source,
        })?;
        let source = path.display().to_string();
        let doc = Document::ingest(id, source, raw).map_err(|source| LoadError::Document {
            path: path.clone(),
            source,
        })?;
        documents.push(doc);
    }

    debug!(dir = %dir.display(), documents = documents.len(), "loaded corpus directory");
    Ok(documents)
}
