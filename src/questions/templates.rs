use crate::keywords::RankedKeyword;
use crate::types::scored::ScoredLine;
use super::masking::mask_keyword;

pub const MCQ_LEAD_IN: &str = "Identify the keyword that completes the statement:\n    ";

pub fn short_question(keyword: &str) -> String {
    format!("Explain the concept of \"{keyword}\" in 2-3 sentences.")
}

pub fn long_question(line: &ScoredLine<'_>) -> String {
    format!(
        "Discuss in detail: \"{}\". Include definitions, examples, and implications.",
        line.line.original
    )
}

/// Mask the highest-ranked keyword that occurs among the line's tokens.
///
/// Traverses keywords in rank order, unlike MCQ construction which walks the
/// line's own tokens. `None` when no ranked keyword is present.
pub fn fill_in_blank(line: &ScoredLine<'_>, keywords: &[RankedKeyword]) -> Option<String> {
    keywords
        .iter()
        .find(|kw| line.line.contains_token(&kw.token))
        .map(|kw| mask_keyword(&line.line.original, &kw.token))
}
