use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error)]
pub enum DocumentIdError {
    #[error("Source path is outside the ingestion root")]
    OutsideRoot,
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl DocumentId {
    /// Create a DocumentId from a source path and the directory it was loaded from.
    pub fn from_path(root: &Path, source: &Path) -> Result<Self, DocumentIdError> {
        let rel = source
            .strip_prefix(root)
            .map_err(|_| DocumentIdError::OutsideRoot)?;

        let normalized = normalize_path(rel)?;

        Ok(DocumentId(normalized))
    }

    /// Id for a single file loaded on its own: its file name.
    pub fn from_file_name(source: &Path) -> Result<Self, DocumentIdError> {
        let name = source.file_name().ok_or(DocumentIdError::OutsideRoot)?;
        normalize_path(Path::new(name)).map(DocumentId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Forward slashes, no leading `./`, lowercase.
fn normalize_path(path: &Path) -> Result<String, DocumentIdError> {
    let s = path.to_str().ok_or(DocumentIdError::InvalidUtf8)?;

    let normalized = s
        .replace('\\', "/")
        .trim_start_matches("./")
        .to_lowercase();

    Ok(normalized)
}

/// Content hash version of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        DocumentVersion(sha256_tagged(content))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Hash over every source feeding a generation pass.
///
/// Computed from `id:version` lines sorted by id then version, so the same set of
/// documents always yields the same version regardless of load order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusVersion(String);

impl CorpusVersion {
    pub fn from_sources<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (&'a DocumentId, &'a DocumentVersion)>,
    {
        let mut entries: Vec<_> = sources.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.as_str().cmp(b.1.as_str())));

        let mut hasher = Sha256::new();
        for (id, version) in entries {
            let line = format!("{}:{}\n", id.as_str(), version.as_str());
            hasher.update(line.as_bytes());
        }

        CorpusVersion(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn sha256_tagged(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
