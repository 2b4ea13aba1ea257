use std::collections::BTreeSet;

/// Common English function words excluded from keyword relevance.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "for", "with", "about", "into",
    "onto", "from", "that", "this", "those", "these", "to", "of", "in", "on", "at", "as", "by",
    "it", "is", "are", "was", "were", "be", "been", "being", "so", "we", "you", "they", "he",
    "she", "them", "their", "there", "here", "can", "could", "should", "would", "may", "might",
    "will", "just", "than", "also", "such", "not", "no", "do", "does", "did", "done", "its",
];

/// An immutable, closed set of stopwords.
///
/// Built once and handed to the [`Preprocessor`](super::Preprocessor);
/// tests can swap in an alternate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    words: BTreeSet<String>,
}

impl StopwordSet {
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every token present in the set, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}
