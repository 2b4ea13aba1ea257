use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::types::identifiers::{DocumentId, DocumentIdError};
use super::document::{Document, DocumentError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Empty path provided")]
    EmptyPath,
    #[error("Path not found: {0}")]
    NotFound(PathBuf),
    #[error("File is not a .txt file: {0}")]
    NotTextFile(PathBuf),
    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),
    #[error("No .txt files found in: {0}")]
    NoDocuments(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Id(#[from] DocumentIdError),
}

/// Loads `.txt` documents from a single file or a directory.
///
/// Directories are not walked recursively.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load from user-entered path text. Surrounding whitespace and one
    /// pair of double quotes are stripped first.
    pub fn load_input(&self, input: &str) -> Result<Vec<Document>, LoadError> {
        let cleaned = clean_input_path(input);
        if cleaned.is_empty() {
            return Err(LoadError::EmptyPath);
        }
        self.load(Path::new(&cleaned))
    }

    pub fn load(&self, path: &Path) -> Result<Vec<Document>, LoadError> {
        if path.as_os_str().is_empty() {
            return Err(LoadError::EmptyPath);
        }

        if path.is_file() {
            return self.load_file(path).map(|doc| vec![doc]);
        }

        if path.is_dir() {
            return self.load_dir(path);
        }

        Err(LoadError::NotFound(path.to_path_buf()))
    }

    fn load_file(&self, path: &Path) -> Result<Document, LoadError> {
        if !is_text_file(path) {
            return Err(LoadError::NotTextFile(path.to_path_buf()));
        }

        let id = DocumentId::from_file_name(path)?;
        let doc = read_document(id, path)?;
        if doc.is_empty() {
            return Err(LoadError::EmptyFile(path.to_path_buf()));
        }

        info!(document = %doc.name, lines = doc.lines.len(), "loaded document");
        Ok(doc)
    }

    fn load_dir(&self, dir: &Path) -> Result<Vec<Document>, LoadError> {
        let mut docs = Vec::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || !is_text_file(&path) {
                continue;
            }

            let id = match DocumentId::from_path(dir, &path) {
                Ok(id) => id,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping file with unusable name");
                    continue;
                }
            };
            match read_document(id, &path) {
                Ok(doc) if doc.is_empty() => {
                    warn!(path = %path.display(), "skipping empty file");
                }
                Ok(doc) => docs.push(doc),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unreadable file");
                }
            }
        }

        if docs.is_empty() {
            return Err(LoadError::NoDocuments(dir.to_path_buf()));
        }

        // Directory order is platform dependent; ids are case-folded so
        // `Notes.txt` and `notes.txt` collide and fall back to the name.
        docs.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.name.cmp(&b.name)));

        info!(directory = %dir.display(), documents = docs.len(), "loaded documents");
        Ok(docs)
    }
}

/// True when the file name ends in `.txt`, ignoring case.
pub fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

fn clean_input_path(input: &str) -> String {
    let trimmed = input.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.trim().to_string(),
        None => trimmed.to_string(),
    }
}

fn read_document(id: DocumentId, path: &Path) -> Result<Document, LoadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let raw = fs::read(path)?;
    Ok(Document::ingest(id, name, raw)?)
}

