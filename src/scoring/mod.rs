pub mod density;

use std::cmp::Ordering;

use crate::keywords::FrequencyMap;
use crate::text::preprocessor::ProcessedLine;
use crate::types::scored::ScoredLine;
pub use density::{DensityScorer, LineScorer, LENGTH_CAP, LENGTH_WEIGHT, DENSITY_WEIGHT};

/// Score every tokenized line against the corpus frequencies and sort by
/// score, highest first.
///
/// Returns nothing when either `lines` or `freq` is empty. Lines without
/// tokens never appear in the output. Equal scores keep input order.
pub fn score_lines<'a, S>(
    scorer: &S,
    lines: &'a [ProcessedLine],
    freq: &FrequencyMap,
) -> Vec<ScoredLine<'a>>
where
    S: LineScorer + ?Sized,
{
    let max_count = match freq.max_count() {
        Some(max) if !lines.is_empty() => max,
        _ => return Vec::new(),
    };

    let mut scored: Vec<ScoredLine<'a>> = lines
        .iter()
        .filter(|line| !line.tokens.is_empty())
        .map(|line| {
            let details = scorer.score_details(line, freq, max_count);
            ScoredLine {
                line,
                score: scorer.score_value(&details),
                details,
            }
        })
        .collect();

    // Stable: ties keep their input order.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug_assert!(scored.windows(2).all(|w| w[0].score >= w[1].score));

    scored
}
