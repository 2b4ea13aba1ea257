use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::keywords::RankedKeyword;
use crate::types::paper::{AnswerLabel, Mcq};
use crate::types::scored::ScoredLine;
use super::masking::mask_keyword;
use super::templates::MCQ_LEAD_IN;

pub const DISTRACTOR_COUNT: usize = 3;

/// Why a line could not be turned into an MCQ. The generator skips the
/// line and moves on; this never reaches the caller of `generate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum McqError {
    #[error("No ranked keyword occurs in the line")]
    NoKeywordInLine,
    #[error("Not enough distractors: {available} available, 3 required")]
    NotEnoughDistractors { available: usize },
}

/// Build an MCQ from one scored line.
///
/// The answer is the first token of the line (in line order) that is a ranked
/// keyword. Three distractors are sampled uniformly from all other keywords,
/// then the four options are shuffled.
pub fn build_mcq<R>(
    line: &ScoredLine<'_>,
    keywords: &[RankedKeyword],
    keyword_set: &HashSet<&str>,
    rng: &mut R,
) -> Result<Mcq, McqError>
where
    R: Rng + ?Sized,
{
    let keyword = line
        .line
        .tokens
        .iter()
        .find(|t| keyword_set.contains(t.as_str()))
        .ok_or(McqError::NoKeywordInLine)?;

    let pool: Vec<&str> = keywords
        .iter()
        .map(|k| k.token.as_str())
        .filter(|k| *k != keyword.as_str())
        .collect();

    if pool.len() < DISTRACTOR_COUNT {
        return Err(McqError::NotEnoughDistractors {
            available: pool.len(),
        });
    }

    let mut options: Vec<&str> = Vec::with_capacity(DISTRACTOR_COUNT + 1);
    options.push(keyword.as_str());
    options.extend(pool.choose_multiple(&mut *rng, DISTRACTOR_COUNT).copied());
    options.shuffle(rng);

    let answer = options
        .iter()
        .position(|o| *o == keyword.as_str())
        .and_then(AnswerLabel::from_index)
        .unwrap_or(AnswerLabel::A);

    Ok(Mcq {
        prompt: format!("{MCQ_LEAD_IN}{}", mask_keyword(&line.line.original, keyword)),
        options: [
            options[0].to_string(),
            options[1].to_string(),
            options[2].to_string(),
            options[3].to_string(),
        ],
        answer,
    })
}
