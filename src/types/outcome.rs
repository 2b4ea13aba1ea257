use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::types::identifiers::{CorpusVersion, DocumentId, DocumentVersion};
use crate::types::paper::QuestionPaper;

/// A source document that fed a generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub lines: usize,
}

/// Requested and produced counts for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCount {
    pub requested: usize,
    pub produced: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCounts {
    pub mcq: SectionCount,
    pub fill: SectionCount,
    pub short: SectionCount,
    pub long: SectionCount,
}

/// Metadata describing a generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub corpus_version: CorpusVersion,
    pub sources: Vec<SourceEntry>,
    pub config: GenerationConfig,

    pub lines_considered: usize,
    pub lines_scored: usize,
    pub keywords_ranked: usize,

    pub sections: SectionCounts,
    pub generated_at: DateTime<Utc>, // informational only
}

/// The result of one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub paper: QuestionPaper,
    pub metadata: GenerationMetadata,
}
