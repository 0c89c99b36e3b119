//! Integration tests for the TextLens text statistics engine.

use std::io::Write;
use tempfile::NamedTempFile;
use textlens::{
    count_numeric_tokens, count_sentences, count_words, most_common_words, normalize, Config,
    TextAnalyzer, TextLensError, TextProcessor,
};

/// A short multi-sentence passage used across tests.
fn create_test_text() -> String {
    "the meeting starts at 9 in room 42,then we break. \
     did everyone read the notes? the notes are long! \
     the end."
        .to_string()
}

#[test]
fn test_short_text_rejected() {
    let mut analyzer = TextAnalyzer::new();

    for text in ["", "   ", "too short", "exactly 14 chr", "  padded text  \n\t"] {
        match analyzer.set_text(text) {
            Err(TextLensError::Validation { reason, .. }) => assert_eq!(reason, "text too short"),
            other => panic!("expected validation error for {text:?}, got {other:?}"),
        }
    }
    assert!(!analyzer.has_text());
}

#[test]
fn test_threshold_text_accepted() {
    let mut analyzer = TextAnalyzer::new();
    assert!(analyzer.set_text("exactly 15 chrs").is_ok());
    assert!(analyzer.set_text("a much longer text than the threshold requires.").is_ok());
}

#[test]
fn test_accessors_before_set_text() {
    let analyzer = TextAnalyzer::new();

    assert!(matches!(analyzer.get_normalized_text(), Err(TextLensError::NoText)));
    assert!(matches!(analyzer.get_word_count(), Err(TextLensError::NoText)));
    assert!(matches!(analyzer.get_sentence_count(), Err(TextLensError::NoText)));
    assert!(matches!(analyzer.get_numeric_token_count(), Err(TextLensError::NoText)));
    assert!(matches!(analyzer.get_most_common_words(), Err(TextLensError::NoText)));
    assert!(matches!(analyzer.get_full_report(), Err(TextLensError::NoText)));
    assert!(matches!(analyzer.analyze(), Err(TextLensError::NoText)));
}

#[test]
fn test_documented_examples() {
    assert_eq!(count_words("Hello world 2024!"), 2);
    assert_eq!(count_numeric_tokens("Room 42 has 3 exits"), 2);
    assert_eq!(count_sentences("Hi. How are you? Fine!"), 3);
    assert_eq!(count_sentences("No punctuation here"), 1);
    assert_eq!(count_sentences("   "), 0);
    assert_eq!(most_common_words("cat dog cat dog bird"), vec!["cat", "dog"]);
}

#[test]
fn test_normalize_commas_and_capitals() {
    let normalized = normalize("hello, world. goodbye,world.");

    assert_eq!(normalized, "Hello, world. Goodbye, world.");
    assert!(!normalized.contains(",w"));
}

#[test]
fn test_full_report() {
    let analyzer = TextAnalyzer::from_text(create_test_text()).unwrap();
    let report = analyzer.get_full_report().unwrap();

    assert_eq!(
        report.normalized_text,
        "The meeting starts at 9 in room 42, then we break. \
         Did everyone read the notes? The notes are long! \
         The end."
    );
    assert_eq!(report.word_count, 20);
    assert_eq!(report.sentence_count, 4);
    assert_eq!(report.numeric_token_count, 2);
    assert_eq!(report.most_common_words, vec!["the"]);
}

#[test]
fn test_accessors_are_idempotent() {
    let analyzer = TextAnalyzer::from_text(create_test_text()).unwrap();

    assert_eq!(analyzer.get_normalized_text().unwrap(), analyzer.get_normalized_text().unwrap());
    assert_eq!(analyzer.get_word_count().unwrap(), analyzer.get_word_count().unwrap());
    assert_eq!(analyzer.get_sentence_count().unwrap(), analyzer.get_sentence_count().unwrap());
    assert_eq!(
        analyzer.get_numeric_token_count().unwrap(),
        analyzer.get_numeric_token_count().unwrap()
    );
    assert_eq!(
        analyzer.get_most_common_words().unwrap(),
        analyzer.get_most_common_words().unwrap()
    );
    assert_eq!(analyzer.get_full_report().unwrap(), analyzer.get_full_report().unwrap());
}

#[test]
fn test_replacing_text_discards_previous_results() {
    let mut analyzer = TextAnalyzer::from_text(create_test_text()).unwrap();
    let before = analyzer.get_full_report().unwrap();

    analyzer.set_text("cat dog cat dog bird 7").unwrap();
    let after = analyzer.get_full_report().unwrap();

    assert_ne!(before, after);
    assert_eq!(after.normalized_text, "Cat dog cat dog bird 7");
    assert_eq!(after.word_count, 5);
    assert_eq!(after.sentence_count, 1);
    assert_eq!(after.numeric_token_count, 1);
    assert_eq!(after.most_common_words, vec!["cat", "dog"]);
}

#[test]
fn test_analyzer_matches_pure_functions() {
    let text = create_test_text();
    let analyzer = TextAnalyzer::from_text(text.clone()).unwrap();

    assert_eq!(analyzer.get_normalized_text().unwrap(), normalize(&text));
    assert_eq!(analyzer.get_word_count().unwrap(), count_words(&text));
    assert_eq!(analyzer.get_sentence_count().unwrap(), count_sentences(&text));
    assert_eq!(analyzer.get_numeric_token_count().unwrap(), count_numeric_tokens(&text));
    assert_eq!(analyzer.get_most_common_words().unwrap(), most_common_words(&text));
    assert_eq!(analyzer.get_full_report().unwrap(), textlens::full_report(&text));
}

#[test]
fn test_report_json() {
    let analyzer = TextAnalyzer::from_text("apples and pears, apples and plums.").unwrap();
    let report = analyzer.get_full_report().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["word_count"], 6);
    assert_eq!(json["sentence_count"], 1);
    assert_eq!(json["numeric_token_count"], 0);
    assert_eq!(json["most_common_words"], serde_json::json!(["apples", "and"]));
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"analyzer": {{"sentence_separator": ""}}, "output": {{"list_separator": " / "}}}}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.output.pretty);

    let mut analyzer = TextAnalyzer::with_config(config.analyzer.clone());
    analyzer.set_text("a b c d. a b c d.").unwrap();
    assert_eq!(analyzer.get_normalized_text().unwrap(), "A b c d.A b c d.");
    assert_eq!(
        analyzer.get_most_common_words_display(&config.output.list_separator).unwrap(),
        "a / b / c / d"
    );
}

#[test]
fn test_config_cannot_lower_threshold() {
    for threshold in [0, 5] {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"analyzer": {{"min_text_length": {threshold}}}}}"#).unwrap();

        assert!(matches!(
            Config::from_file(file.path()),
            Err(TextLensError::Serialization(_))
        ));
    }

    // Whatever configuration is used, short text is still refused.
    let mut analyzer = TextAnalyzer::with_config(Config::default().analyzer);
    for text in ["   ", "hi", "a b. a b."] {
        assert!(analyzer.set_text(text).unwrap_err().is_validation());
    }
    assert!(!analyzer.has_text());
}

#[test]
fn test_config_from_invalid_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    assert!(matches!(
        Config::from_file(file.path()),
        Err(TextLensError::Serialization(_))
    ));
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    assert!(matches!(Config::from_file(&missing), Err(TextLensError::Io(_))));
}
