use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::GenerationConfig;
use crate::document::Document;
use crate::keywords::{top_keywords, FrequencyMap};
use crate::questions::QuestionGenerator;
use crate::scoring::{score_lines, DensityScorer, LineScorer};
use crate::text::{Preprocessor, ProcessedLine};
use crate::types::identifiers::CorpusVersion;
use crate::types::outcome::{
    GenerationMetadata, GenerationOutcome, SectionCount, SectionCounts, SourceEntry,
};

/// Runs a full generation pass: preprocess, count, rank, score, synthesize.
pub struct PaperGenerator<S> {
    preprocessor: Preprocessor,
    scorer: S,
}

impl Default for PaperGenerator<DensityScorer> {
    fn default() -> Self {
        Self {
            preprocessor: Preprocessor::default(),
            scorer: DensityScorer,
        }
    }
}

impl<S> PaperGenerator<S>
where
    S: LineScorer,
{
    pub fn new(preprocessor: Preprocessor, scorer: S) -> Self {
        Self {
            preprocessor,
            scorer,
        }
    }

    /// Generate with a generator seeded from `config.seed`, or from entropy
    /// when no seed is configured.
    pub fn generate_seeded(&self, docs: &[Document], config: &GenerationConfig) -> GenerationOutcome {
        let mut rng = rng_for(config);
        self.generate(docs, config, &mut rng)
    }

    pub fn generate<R>(
        &self,
        docs: &[Document],
        config: &GenerationConfig,
        rng: &mut R,
    ) -> GenerationOutcome
    where
        R: Rng + ?Sized,
    {
        let sources: Vec<SourceEntry> = docs
            .iter()
            .map(|doc| SourceEntry {
                id: doc.id.clone(),
                version: doc.version.clone(),
                lines: doc.lines.len(),
            })
            .collect();
        let corpus_version = CorpusVersion::from_sources(sources.iter().map(|s| (&s.id, &s.version)));

        let processed = self.preprocessor.process_documents(docs);
        self.run(processed, sources, corpus_version, config, rng)
    }

    /// Generate from a bare sequence of raw lines, with no source documents.
    pub fn generate_from_lines<I, T, R>(
        &self,
        lines: I,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> GenerationOutcome
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
        R: Rng + ?Sized,
    {
        let processed = self.preprocessor.process_lines(lines);
        let corpus_version = CorpusVersion::from_sources(std::iter::empty());
        self.run(processed, Vec::new(), corpus_version, config, rng)
    }

    fn run<R>(
        &self,
        processed: Vec<ProcessedLine>,
        sources: Vec<SourceEntry>,
        corpus_version: CorpusVersion,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> GenerationOutcome
    where
        R: Rng + ?Sized,
    {
        // 1. Frequency and ranking
        let tokens = Preprocessor::collect_tokens(&processed);
        let freq = FrequencyMap::from_tokens(&tokens);
        let keywords = top_keywords(&freq, config.keyword_limit);

        // 2. Scoring
        let scored = score_lines(&self.scorer, &processed, &freq);

        // 3. Synthesis
        let counts = config.counts;
        let paper = QuestionGenerator::new(counts).generate(&scored, &keywords, rng);

        info!(
            lines = scored.len(),
            keywords = keywords.len(),
            mcqs = paper.mcqs.len(),
            fill_in_blanks = paper.fill_in_blanks.len(),
            short = paper.short_questions.len(),
            long = paper.long_questions.len(),
            "generated question paper"
        );

        let sections = SectionCounts {
            mcq: SectionCount {
                requested: counts.mcq,
                produced: paper.mcqs.len(),
            },
            fill: SectionCount {
                requested: counts.fill,
                produced: paper.fill_in_blanks.len(),
            },
            short: SectionCount {
                requested: counts.short,
                produced: paper.short_questions.len(),
            },
            long: SectionCount {
                requested: counts.long,
                produced: paper.long_questions.len(),
            },
        };

        let metadata = GenerationMetadata {
            corpus_version,
            sources,
            config: config.clone(),
            lines_considered: processed.len(),
            lines_scored: scored.len(),
            keywords_ranked: keywords.len(),
            sections,
            generated_at: Utc::now(),
        };

        GenerationOutcome { paper, metadata }
    }
}

/// The generator used for distractor sampling under `config`.
pub fn rng_for(config: &GenerationConfig) -> ChaCha8Rng {
    match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
