/*!
 * Inline tag handling.
 *
 * Tags are formatting markers (`<b>`, `</i>`, `<br/>`), placeholders
 * (`{1}`, `{name}`) and generic annotations (`[note]`) that a translator
 * must carry over verbatim.
 *
 * - `config`: serializable pattern and render whitelist
 * - `pattern`: compiled pattern, tokenizer and tag-name heuristic
 */

pub mod config;
pub mod pattern;

pub use config::{TagConfig, DEFAULT_RENDER_TAGS, DEFAULT_TAG_PATTERN};
pub use pattern::{TagPattern, Token};

/// Tags of `text` under the standard pattern, left to right
pub fn extract_tags(text: &str) -> Vec<String> {
    TagPattern::standard().extract_tags(text)
}

/// Tokens of `text` under the standard pattern
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    TagPattern::standard().tokenize(text)
}
