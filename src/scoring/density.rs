use crate::keywords::FrequencyMap;
use crate::text::preprocessor::ProcessedLine;
use crate::types::scored::LineScoreDetails;

pub const DENSITY_WEIGHT: f64 = 0.8;
pub const LENGTH_WEIGHT: f64 = 0.2;
/// Token count at which the length bonus saturates.
pub const LENGTH_CAP: f64 = 20.0;

pub trait LineScorer {
    fn score_details(
        &self,
        line: &ProcessedLine,
        freq: &FrequencyMap,
        max_count: usize,
    ) -> LineScoreDetails;

    /// `0.8 * density + 0.2 * min(1, tokens / 20)`.
    fn score_value(&self, details: &LineScoreDetails) -> f64 {
        if details.token_count == 0 {
            return 0.0;
        }
        let tokens = details.token_count as f64;
        let density = details.keyword_score / tokens;
        let length_bonus = (tokens / LENGTH_CAP).min(1.0);
        density * DENSITY_WEIGHT + length_bonus * LENGTH_WEIGHT
    }
}

/// v0: keyword density plus a capped length bonus.
///
/// Each token contributes `freq[token] / max_count`; unknown tokens
/// contribute nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct DensityScorer;

impl LineScorer for DensityScorer {
    fn score_details(
        &self,
        line: &ProcessedLine,
        freq: &FrequencyMap,
        max_count: usize,
    ) -> LineScoreDetails {
        let max = max_count as f64;
        let keyword_score = if max_count == 0 {
            0.0
        } else {
            line.tokens
                .iter()
                .filter_map(|token| freq.get(token))
                .map(|count| count as f64 / max)
                .sum()
        };

        LineScoreDetails {
            keyword_score,
            token_count: line.tokens.len(),
        }
    }
}
