pub mod masking;
pub mod mcq;
pub mod templates;

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::keywords::RankedKeyword;
use crate::types::paper::QuestionPaper;
use crate::types::scored::ScoredLine;
pub use masking::mask_keyword;
pub use mcq::{build_mcq, McqError};
pub use templates::{fill_in_blank, long_question, short_question};

/// Requested number of questions per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionCounts {
    pub mcq: usize,
    pub fill: usize,
    pub short: usize,
    pub long: usize,
}

impl Default for QuestionCounts {
    fn default() -> Self {
        Self {
            mcq: 5,
            fill: 5,
            short: 5,
            long: 3,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuestionGenerator {
    counts: QuestionCounts,
}

impl QuestionGenerator {
    pub fn new(counts: QuestionCounts) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> QuestionCounts {
        self.counts
    }

    /// Build a paper from lines sorted by score and keywords sorted by rank.
    ///
    /// Each section visits at most `min(requested, available)` candidates.
    /// A candidate that cannot yield a question is skipped without being
    /// replaced, so sections can come out shorter than requested.
    pub fn generate<R>(
        &self,
        lines: &[ScoredLine<'_>],
        keywords: &[RankedKeyword],
        rng: &mut R,
    ) -> QuestionPaper
    where
        R: Rng + ?Sized,
    {
        let mut paper = QuestionPaper::default();
        if lines.is_empty() || keywords.is_empty() {
            return paper;
        }

        let keyword_set: HashSet<&str> = keywords.iter().map(|k| k.token.as_str()).collect();

        for (index, line) in lines.iter().take(self.counts.mcq).enumerate() {
            match build_mcq(line, keywords, &keyword_set, rng) {
                Ok(mcq) => paper.mcqs.push(mcq),
                Err(reason) => debug!(line = index, %reason, "skipping mcq"),
            }
        }

        for (index, line) in lines.iter().take(self.counts.fill).enumerate() {
            match fill_in_blank(line, keywords) {
                Some(question) => paper.fill_in_blanks.push(question),
                None => debug!(line = index, "skipping fill-in-blank: no ranked keyword in line"),
            }
        }

        paper.short_questions = keywords
            .iter()
            .take(self.counts.short)
            .map(|k| short_question(&k.token))
            .collect();

        paper.long_questions = lines.iter().take(self.counts.long).map(long_question).collect();

        paper
    }
}

/// Convenience wrapper over [`QuestionGenerator::generate`].
pub fn generate<R>(
    lines: &[ScoredLine<'_>],
    keywords: &[RankedKeyword],
    counts: QuestionCounts,
    rng: &mut R,
) -> QuestionPaper
where
    R: Rng + ?Sized,
{
    QuestionGenerator::new(counts).generate(lines, keywords, rng)
}
