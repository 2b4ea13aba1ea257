use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use paper_forge::config::GenerationConfig;
use paper_forge::pipeline::PaperGenerator;
use paper_forge::questions::QuestionCounts;
use paper_forge::scoring::DensityScorer;
use paper_forge::text::{Preprocessor, StopwordSet};

#[test]
fn metadata_reports_requested_and_produced_counts() {
    let config = GenerationConfig::v0();
    let outcome = PaperGenerator::default().generate_from_lines(
        [
            "Graphs model relationships between nodes",
            "A tree is a connected acyclic graph",
        ],
        &config,
        &mut ChaCha8Rng::seed_from_u64(5),
    );

    let meta = &outcome.metadata;
    assert_eq!(meta.lines_considered, 2);
    assert_eq!(meta.lines_scored, 2);
    assert_eq!(meta.keywords_ranked, 9);
    assert!(meta.sources.is_empty());

    assert_eq!(meta.sections.mcq.requested, 5);
    assert_eq!(meta.sections.mcq.produced, 2);
    assert_eq!(meta.sections.fill.produced, 2);
    assert_eq!(meta.sections.short.produced, 5);
    assert_eq!(meta.sections.long.requested, 3);
    assert_eq!(meta.sections.long.produced, 2);
    assert_eq!(outcome.paper.short_questions.len(), 5);
}

#[test]
fn keyword_limit_bounds_the_keyword_pool() {
    let config = GenerationConfig {
        counts: QuestionCounts::default(),
        keyword_limit: 3,
        seed: None,
    };
    let outcome = PaperGenerator::default().generate_from_lines(
        ["alpha beta gamma delta epsilon", "alpha beta gamma"],
        &config,
        &mut ChaCha8Rng::seed_from_u64(0),
    );

    assert_eq!(outcome.metadata.keywords_ranked, 3);
    // Three keywords leave only two distractors.
    assert!(outcome.paper.mcqs.is_empty());
    assert_eq!(outcome.paper.short_questions.len(), 3);
}

#[test]
fn stopword_only_corpus_scores_nothing() {
    let outcome = PaperGenerator::default().generate_from_lines(
        ["the and of", "it is what it is", "--- !!!"],
        &GenerationConfig::v0(),
        &mut ChaCha8Rng::seed_from_u64(0),
    );

    // "what" is not a stopword, so one line survives.
    assert_eq!(outcome.metadata.lines_scored, 1);

    let nothing = PaperGenerator::default().generate_from_lines(
        ["the and of", "--- !!!", ""],
        &GenerationConfig::v0(),
        &mut ChaCha8Rng::seed_from_u64(0),
    );
    assert_eq!(nothing.metadata.lines_scored, 0);
    assert!(nothing.paper.is_empty());
}

#[test]
fn custom_preprocessor_changes_keywords() {
    let generator = PaperGenerator::new(Preprocessor::new(StopwordSet::empty()), DensityScorer);
    let outcome = generator.generate_from_lines(
        ["the cat"],
        &GenerationConfig::v0(),
        &mut ChaCha8Rng::seed_from_u64(0),
    );

    assert_eq!(outcome.metadata.keywords_ranked, 2);
    assert_eq!(
        outcome.paper.short_questions[0],
        "Explain the concept of \"cat\" in 2-3 sentences."
    );
}
