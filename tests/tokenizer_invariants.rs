use paper_forge::keywords::FrequencyMap;
use paper_forge::text::{normalize, tokenize, Preprocessor, StopwordSet, ENGLISH_STOPWORDS};

#[test]
fn invariant_punctuation_becomes_space_and_case_folds() {
    let pre = Preprocessor::default();
    let line = pre.process_line("Hello, World! 123");

    assert_eq!(line.original, "Hello, World! 123");
    assert_eq!(line.cleaned, "hello  world  123");
    assert_eq!(line.tokens, vec!["hello", "world", "123"]);
}

#[test]
fn invariant_stopwords_are_dropped() {
    let pre = Preprocessor::default();
    let line = pre.process_line("The cat and the hat, it is not there.");

    assert_eq!(line.tokens, vec!["cat", "hat"]);
}

#[test]
fn invariant_empty_input_yields_empty_output() {
    assert_eq!(normalize(""), "");
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t  ").is_empty());

    let pre = Preprocessor::default();
    assert!(pre.process_line("").tokens.is_empty());
    assert!(pre.process_lines(Vec::<String>::new()).is_empty());
}

#[test]
fn invariant_tokens_never_empty() {
    let tokens = tokenize("  spaced\t\tout \n words  ");
    assert_eq!(tokens, vec!["spaced", "out", "words"]);
    assert!(tokens.iter().all(|t| !t.is_empty()));
}

#[test]
fn invariant_non_ascii_is_treated_as_separator() {
    assert_eq!(normalize("café"), "caf ");
    assert_eq!(tokenize(&normalize("naïve café")), vec!["na", "ve", "caf"]);
}

#[test]
fn invariant_lines_without_content_are_dropped() {
    let pre = Preprocessor::default();
    let processed = pre.process_lines(["The and of", "!!! ---", "", "Real content here"]);

    assert_eq!(processed.len(), 1);
    assert_eq!(processed[0].original, "Real content here");
    assert_eq!(processed[0].tokens, vec!["real", "content"]);
}

#[test]
fn invariant_no_stemming() {
    let pre = Preprocessor::default();
    let lines = pre.process_lines([
        "Graphs model relationships between nodes",
        "A tree is a connected acyclic graph",
    ]);

    assert_eq!(lines[0].tokens, vec!["graphs", "model", "relationships", "between", "nodes"]);
    assert_eq!(lines[1].tokens, vec!["tree", "connected", "acyclic", "graph"]);

    let freq = FrequencyMap::from_tokens(Preprocessor::collect_tokens(&lines));
    assert_eq!(freq.get("graph"), Some(1));
    assert_eq!(freq.get("graphs"), Some(1));
}

#[test]
fn stopword_set_is_injectable() {
    let english = Preprocessor::default();
    assert_eq!(english.process_line("the cat").tokens, vec!["cat"]);

    let none = Preprocessor::new(StopwordSet::empty());
    assert_eq!(none.process_line("the cat").tokens, vec!["the", "cat"]);

    let custom = Preprocessor::new(StopwordSet::from_words(["cat"]));
    assert_eq!(custom.process_line("the cat").tokens, vec!["the"]);
}

#[test]
fn english_stopwords_are_a_closed_set() {
    let set = StopwordSet::english();
    assert_eq!(set.len(), ENGLISH_STOPWORDS.len());
    assert_eq!(set.len(), 62);
    assert!(set.contains("its"));
    assert!(set.contains("being"));
    assert!(!set.contains("graph"));
}
