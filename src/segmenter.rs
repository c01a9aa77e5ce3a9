/*!
 * Sentence segmentation of source text.
 *
 * Source text is cut into translation units in two passes:
 * - paragraphs, at any blank line (two or more newlines, optionally with
 *   whitespace in between), which is always a boundary
 * - sentences, wherever `.`, `!` or `?` is directly followed by whitespace
 *
 * Terminal punctuation stays attached to the sentence it ends.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Blank-line paragraph separator
static PARAGRAPH_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").expect("Invalid paragraph break regex")
});

/// Sentence terminator followed by the whitespace that ends the sentence
static SENTENCE_END_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[.!?]\s+").expect("Invalid sentence end regex")
});

/// Splits raw text into translation units
pub struct Segmenter;

impl Segmenter {
    /// Split text into ordered, trimmed, non-empty segments.
    ///
    /// Blank input yields an empty vector; any other input yields at least
    /// one segment.
    pub fn segment(text: &str) -> Vec<String> {
        let mut segments = Vec::new();

        for paragraph in PARAGRAPH_BREAK_REGEX.split(text.trim()) {
            for sentence in Self::split_sentences(paragraph.trim()) {
                let sentence = sentence.trim();
                if !sentence.is_empty() {
                    segments.push(sentence.to_string());
                }
            }
        }

        debug!("Segmented {} chars into {} segment(s)", text.len(), segments.len());

        segments
    }

    /// Split one paragraph after each sentence terminator.
    fn split_sentences(paragraph: &str) -> Vec<&str> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for terminator in SENTENCE_END_REGEX.find_iter(paragraph) {
            // the terminator is a single ASCII byte
            sentences.push(&paragraph[start..terminator.start() + 1]);
            start = terminator.end();
        }
        sentences.push(&paragraph[start..]);

        sentences
    }
}
