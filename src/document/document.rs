use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// A source text, split into lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    /// File name as displayed to the user.
    pub name: String,
    pub lines: Vec<String>,
}

impl Document {
    /// Ingest raw bytes into a Document.
    ///
    /// Validates UTF-8, computes the content version and splits on line
    /// endings (`\n` or `\r\n`). A trailing newline does not add an empty line.
    pub fn ingest(
        id: DocumentId,
        name: impl Into<String>,
        raw_content: Vec<u8>,
    ) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;

        let version = DocumentVersion::from_content(content.as_bytes());
        let lines = content.lines().map(str::to_string).collect();

        Ok(Document {
            id,
            version,
            name: name.into(),
            lines,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
