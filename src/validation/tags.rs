/*!
 * Tag preservation checks for translated segments.
 *
 * Source and translation tags are compared as multisets: each source tag
 * consumes one equal tag from the translation, and every source tag left
 * without a partner is reported missing. Order in the translation does not
 * matter and surplus translation tags are never flagged.
 */

use std::collections::HashMap;

use log::debug;

use crate::tags::TagPattern;

/// Tags of `source` with no remaining counterpart in `translation`.
///
/// Reported in source order, one entry per missing occurrence.
pub fn missing_tags(pattern: &TagPattern, source: &str, translation: &str) -> Vec<String> {
    let mut available: HashMap<String, usize> = HashMap::new();
    for tag in pattern.extract_tags(translation) {
        *available.entry(tag).or_insert(0) += 1;
    }

    let mut missing = Vec::new();
    for tag in pattern.extract_tags(source) {
        match available.get_mut(&tag) {
            Some(count) if *count > 0 => *count -= 1,
            _ => missing.push(tag),
        }
    }

    missing
}

/// Result of tag validation for a single segment
#[derive(Debug, Clone, PartialEq)]
pub struct TagEntryResult {
    /// Segment index
    pub index: usize,
    /// Whether validation passed
    pub passed: bool,
    /// Source tags absent from the translation
    pub missing: Vec<String>,
}

impl TagEntryResult {
    /// Create a passing result
    pub fn passed(index: usize) -> Self {
        Self {
            index,
            passed: true,
            missing: vec![],
        }
    }

    /// Create a failing result
    pub fn failed(index: usize, missing: Vec<String>) -> Self {
        Self {
            index,
            passed: false,
            missing,
        }
    }
}

/// Result of validating tags for a document
#[derive(Debug, Clone)]
pub struct TagValidationResult {
    /// Overall pass/fail status
    pub passed: bool,
    /// Results for each entry
    pub entry_results: Vec<TagEntryResult>,
    /// Total number of missing tag occurrences
    pub total_missing: usize,
}

impl TagValidationResult {
    /// Get all failed entries
    pub fn failed_entries(&self) -> Vec<&TagEntryResult> {
        self.entry_results.iter().filter(|r| !r.passed).collect()
    }
}

/// Tag validator for translated segments
pub struct TagValidator<'a> {
    pattern: &'a TagPattern,
}

impl<'a> TagValidator<'a> {
    /// Create a validator over the given pattern
    pub fn new(pattern: &'a TagPattern) -> Self {
        Self { pattern }
    }

    /// Validate one segment.
    ///
    /// Blank translations pass: there is nothing to warn about until the
    /// translator starts typing.
    pub fn validate_entry(&self, index: usize, source: &str, translation: &str) -> TagEntryResult {
        if translation.trim().is_empty() {
            return TagEntryResult::passed(index);
        }

        let missing = missing_tags(self.pattern, source, translation);
        if missing.is_empty() {
            TagEntryResult::passed(index)
        } else {
            TagEntryResult::failed(index, missing)
        }
    }

    /// Validate a collection of (index, source, translation) triples
    pub fn validate_collection(&self, pairs: &[(usize, &str, &str)]) -> TagValidationResult {
        let entry_results: Vec<TagEntryResult> = pairs
            .iter()
            .map(|(index, source, translation)| self.validate_entry(*index, source, translation))
            .collect();

        let total_missing: usize = entry_results.iter().map(|r| r.missing.len()).sum();
        let passed = entry_results.iter().all(|r| r.passed);

        debug!(
            "Tag validation: {} entries, {} missing tag(s)",
            pairs.len(),
            total_missing
        );

        TagValidationResult {
            passed,
            entry_results,
            total_missing,
        }
    }
}
