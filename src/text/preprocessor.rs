use serde::{Deserialize, Serialize};

use crate::document::Document;
use super::normalize::{normalize, tokenize};
use super::stopwords::StopwordSet;

/// A source line after normalization and stopword filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedLine {
    pub original: String,
    pub cleaned: String,
    pub tokens: Vec<String>,
}

impl ProcessedLine {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }
}

/// Turns raw lines into [`ProcessedLine`]s using an injected stopword set.
#[derive(Debug, Clone, Default)]
pub struct Preprocessor {
    stopwords: StopwordSet,
}

impl Preprocessor {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn process_line(&self, line: &str) -> ProcessedLine {
        let cleaned = normalize(line);
        let tokens = self.stopwords.filter(tokenize(&cleaned));
        ProcessedLine {
            original: line.to_string(),
            cleaned,
            tokens,
        }
    }

    /// Process raw lines, dropping any that keep no tokens.
    pub fn process_lines<I, S>(&self, lines: I) -> Vec<ProcessedLine>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| self.process_line(line.as_ref()))
            .filter(|processed| !processed.tokens.is_empty())
            .collect()
    }

    pub fn process_document(&self, doc: &Document) -> Vec<ProcessedLine> {
        self.process_lines(&doc.lines)
    }

    /// Concatenate processed lines across documents, in document order.
    pub fn process_documents(&self, docs: &[Document]) -> Vec<ProcessedLine> {
        docs.iter().flat_map(|doc| self.process_document(doc)).collect()
    }

    /// Flatten all tokens of all lines into one ordered sequence.
    pub fn collect_tokens(lines: &[ProcessedLine]) -> Vec<String> {
        lines.iter().flat_map(|l| l.tokens.iter().cloned()).collect()
    }
}
