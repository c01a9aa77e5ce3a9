/*!
 * Tests for tag extraction and the missing-tag diff
 */

use catwork::tags::{self, TagConfig, TagPattern};
use catwork::validation::TagValidator;
use catwork::{missing_tags, WorkbenchError};

fn missing(source: &str, translation: &str) -> Vec<String> {
    missing_tags(TagPattern::standard(), source, translation)
}

/// Test left-to-right extraction across all three tag shapes
#[test]
fn test_extractTags_withAllShapes_shouldKeepOrder() {
    assert_eq!(
        tags::extract_tags("Hello <b>{1}</b> [x]"),
        vec!["<b>", "{1}", "</b>", "[x]"]
    );
}

/// Test that tokenizing never loses characters
#[test]
fn test_tokenize_withAwkwardInput_shouldReconstruct() {
    let inputs = [
        "",
        "plain",
        "<b",
        "{unclosed and [also",
        "<<b>>",
        "[a][b]{c}<d>",
        "ñandú <i>über</i> 日本語 {名前}",
    ];
    for input in inputs {
        let rebuilt: String = tags::tokenize(input).iter().map(|t| t.value).collect();
        assert_eq!(rebuilt, input);
    }
}

/// Test that adjacent tags are separate tokens
#[test]
fn test_tokenize_withAdjacentTags_shouldNotMerge() {
    let tokens = tags::tokenize("[a][b]{c}<d>");
    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|t| t.is_tag));
}

/// Test the documented diff examples
#[test]
fn test_missingTags_withDocumentedExamples_shouldMatch() {
    assert_eq!(missing("<b>{1}</b>", "{1}"), vec!["<b>", "</b>"]);
    assert!(missing("<b>x</b>", "<b>x</b><b>y</b>").is_empty());
    assert_eq!(missing("{1}{1}", "{1}"), vec!["{1}"]);
}

/// Test that every source tag present in the translation is never reported
#[test]
fn test_missingTags_withIdenticalText_shouldBeEmpty() {
    let text = "<b>{1}</b> [x] <br/> {1}";
    assert!(missing(text, text).is_empty());
}

/// Test that the count of missing tags equals the multiset deficit
#[test]
fn test_missingTags_withPartialDeficit_shouldReportEachOccurrence() {
    let result = missing("{a}{a}{a}<b></b>", "{a}</b>");
    assert_eq!(result, vec!["{a}", "{a}", "<b>"]);
}

/// Test that a custom pattern changes what counts as a tag
#[test]
fn test_missingTags_withCustomPattern_shouldUseIt() {
    let pattern = TagPattern::new(r"%\d+\$s", ["b"]).unwrap();
    assert_eq!(
        missing_tags(&pattern, "Hello %1$s <b>", "Hola"),
        vec!["%1$s"]
    );
}

/// Test building a pattern from configuration
#[test]
fn test_fromConfig_withInvalidPattern_shouldReturnInvalidPattern() {
    let config = TagConfig {
        pattern: "(".to_string(),
        ..TagConfig::default()
    };
    assert!(matches!(
        TagPattern::from_config(&config),
        Err(WorkbenchError::InvalidPattern(_))
    ));
}

/// Test collection validation over a small document
#[test]
fn test_validateCollection_withCleanDocument_shouldPass() {
    let validator = TagValidator::new(TagPattern::standard());
    let pairs = vec![
        (0, "<b>Hi</b>", "<b>Hola</b>"),
        (1, "{n} items", "{n} artículos"),
    ];
    let result = validator.validate_collection(&pairs);
    assert!(result.passed);
    assert_eq!(result.total_missing, 0);
    assert!(result.failed_entries().is_empty());
}
