//! Round-trip tests for classifier state export/import.

use std::fs;
use std::sync::Arc;

use krites::analysis::tokenizer::CharacterTokenizer;
use krites::prelude::*;
use tempfile::TempDir;

/// Compare two classifiers by their exported JSON state, field by field.
/// The vocabulary serializes as an array in no particular order, so it is
/// compared as a set.
fn assert_same_state(a: &NaiveBayesClassifier, b: &NaiveBayesClassifier) {
    let a: serde_json::Value = serde_json::from_str(&a.to_json().unwrap()).unwrap();
    let b: serde_json::Value = serde_json::from_str(&b.to_json().unwrap()).unwrap();

    for field in krites::classifier::STATE_FIELDS {
        if field == "vocabulary" {
            let vocab_a: std::collections::BTreeSet<&str> =
                a[field].as_array().unwrap().iter().filter_map(|v| v.as_str()).collect();
            let vocab_b: std::collections::BTreeSet<&str> =
                b[field].as_array().unwrap().iter().filter_map(|v| v.as_str()).collect();
            assert_eq!(vocab_a, vocab_b, "vocabulary differs after round-trip");
        } else {
            assert_eq!(a[field], b[field], "field `{field}` differs after round-trip");
        }
    }
}

#[test]
fn test_round_trip_of_trained_model() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.learn("Fun times were had by all", "positive")?;
    classifier.learn("sad dark rainy day in the cave", "negative")?;

    let revived = NaiveBayesClassifier::from_json(&classifier.to_json()?)?;
    assert_same_state(&classifier, &revived);

    // The revived model behaves identically.
    assert_eq!(
        revived.categorize("a fun day")?,
        classifier.categorize("a fun day")?
    );

    Ok(())
}

#[test]
fn test_round_trip_of_empty_model() -> Result<()> {
    let classifier = NaiveBayesClassifier::new();
    let revived = NaiveBayesClassifier::from_json(&classifier.to_json()?)?;

    assert_same_state(&classifier, &revived);
    assert_eq!(revived.total_documents(), 0);
    assert_eq!(revived.categorize("anything")?, None);

    Ok(())
}

#[test]
fn test_revived_model_can_keep_learning() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.learn("Chinese Beijing Chinese", "chinese")?;

    let mut revived = NaiveBayesClassifier::from_json(&classifier.to_json()?)?;
    revived.learn("Tokyo Japan Chinese", "japanese")?;

    assert_eq!(revived.total_documents(), 2);
    assert_eq!(revived.categories(), ["chinese", "japanese"]);
    assert_eq!(revived.token_frequency("chinese", "Chinese"), 2);
    assert_eq!(revived.token_frequency("japanese", "Tokyo"), 1);

    Ok(())
}

#[test]
fn test_custom_tokenizer_must_be_resupplied() -> Result<()> {
    let config = ClassifierConfig::new().with_tokenizer(Arc::new(CharacterTokenizer::new()));
    let mut classifier = NaiveBayesClassifier::with_config(config);
    classifier.learn("abcd", "happy")?;

    let json = classifier.to_json()?;

    // Without re-supplying the tokenizer, the revived model falls back to
    // the default word tokenizer: the statistical state survives, the
    // capability does not.
    let revived = NaiveBayesClassifier::from_json(&json)?;
    assert_eq!(revived.tokenizer_name(), "word");
    assert_eq!(revived.vocabulary_size(), 4);

    let config = ClassifierConfig::new().with_tokenizer(Arc::new(CharacterTokenizer::new()));
    let mut revived = NaiveBayesClassifier::from_json_with_config(&json, config)?;
    assert_eq!(revived.tokenizer_name(), "character");

    revived.learn("ab", "happy")?;
    assert_eq!(revived.token_frequency("happy", "a"), 2);

    Ok(())
}

#[test]
fn test_state_persists_through_a_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.json");

    let mut classifier = NaiveBayesClassifier::new();
    classifier.learn("amazing, awesome movie!! Yeah!!", "positive")?;
    classifier.learn("terrible, shitty thing. Damn.", "negative")?;

    fs::write(&path, classifier.to_json()?)?;

    let revived = NaiveBayesClassifier::from_json(&fs::read_to_string(&path)?)?;
    assert_same_state(&classifier, &revived);
    assert_eq!(
        revived.categorize("awesome, amazing!!")?.as_deref(),
        Some("positive")
    );

    Ok(())
}

#[test]
fn test_import_rejects_records_with_missing_fields() {
    let mut classifier = NaiveBayesClassifier::new();
    classifier.learn("a b c", "x").unwrap();
    let json = classifier.to_json().unwrap();

    for field in krites::classifier::STATE_FIELDS {
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value.as_object_mut().unwrap().remove(field);
        let broken = serde_json::to_string(&value).unwrap();

        assert!(
            NaiveBayesClassifier::from_json(&broken).is_err(),
            "import should fail when `{field}` is missing"
        );
    }
}
