use crate::text::preprocessor::ProcessedLine;

/// Internal: a processed line together with its importance score.
/// Borrows the line to avoid cloning text before questions are built.
#[derive(Debug, Clone)]
pub struct ScoredLine<'a> {
    pub line: &'a ProcessedLine,

    pub score: f64,
    pub details: LineScoreDetails,
}

/// Internal: scoring components before they are folded into one number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineScoreDetails {
    /// Sum of `freq[token] / max_count` over the line's tokens.
    pub keyword_score: f64,
    pub token_count: usize,
}
