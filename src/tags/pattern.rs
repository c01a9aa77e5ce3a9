/*!
 * Tag tokenization.
 *
 * A `TagPattern` is the single compiled alternation used for extraction,
 * highlighting, diffing and rendering, together with the whitelist of tag
 * names that the formatted view renders live. Tags are opaque: two tokens
 * are the same tag only when their strings are equal.
 */

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::config::TagConfig;
use crate::errors::WorkbenchError;

/// Process-wide pattern built from the default configuration
static STANDARD_PATTERN: Lazy<TagPattern> = Lazy::new(|| {
    TagPattern::from_config(&TagConfig::default()).expect("Invalid default tag pattern")
});

/// A slice of tokenized text: either one tag or a run of plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Whether the value was matched by the tag pattern
    pub is_tag: bool,
    /// The exact substring of the input
    pub value: &'a str,
}

impl<'a> Token<'a> {
    /// Create a tag token
    pub fn tag(value: &'a str) -> Self {
        Self { is_tag: true, value }
    }

    /// Create a plain-text token
    pub fn text(value: &'a str) -> Self {
        Self { is_tag: false, value }
    }
}

/// Compiled tag pattern plus render whitelist
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
    render_tags: HashSet<String>,
}

impl TagPattern {
    /// Compile a pattern and whitelist.
    ///
    /// Fails when the regex does not compile, when it can match the empty
    /// string (which would produce zero-width tags), or when a whitelist
    /// entry is blank.
    pub fn new<I, S>(pattern: &str, render_tags: I) -> Result<Self, WorkbenchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regex = Regex::new(pattern)
            .map_err(|e| WorkbenchError::InvalidPattern(e.to_string()))?;

        if regex.is_match("") {
            return Err(WorkbenchError::InvalidPattern(format!(
                "pattern '{}' matches the empty string",
                pattern
            )));
        }

        let mut names = HashSet::new();
        for tag in render_tags {
            let name = tag.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(WorkbenchError::InvalidPattern(
                    "render tag names must not be blank".to_string(),
                ));
            }
            names.insert(name);
        }

        Ok(Self {
            regex,
            render_tags: names,
        })
    }

    /// Build from serialized configuration
    pub fn from_config(config: &TagConfig) -> Result<Self, WorkbenchError> {
        Self::new(&config.pattern, &config.render_tags)
    }

    /// The pattern compiled from `TagConfig::default()`
    pub fn standard() -> &'static TagPattern {
        &STANDARD_PATTERN
    }

    /// Source of the compiled regex
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Split text into tag and plain-text tokens, in order.
    ///
    /// Concatenating the values gives back the input exactly. Empty plain
    /// runs are not emitted.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last = 0;

        for tag in self.regex.find_iter(text) {
            if tag.start() > last {
                tokens.push(Token::text(&text[last..tag.start()]));
            }
            tokens.push(Token::tag(tag.as_str()));
            last = tag.end();
        }
        if last < text.len() {
            tokens.push(Token::text(&text[last..]));
        }

        tokens
    }

    /// All tag tokens in left-to-right order, duplicates included
    pub fn extract_tags(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Whether `text` is exactly one tag token
    pub fn is_tag(&self, text: &str) -> bool {
        self.regex
            .find(text)
            .is_some_and(|m| m.start() == 0 && m.end() == text.len())
    }

    /// Normalized name of an angle-bracket tag (`</B>` -> `b`, `<br/>` -> `br`).
    ///
    /// Heuristic, not a markup parser: strip `<`, `>` and `/` from both ends,
    /// take the first whitespace-delimited word, lowercase it and drop a
    /// trailing slash. Curly and square tokens have no name.
    pub fn tag_name(token: &str) -> Option<String> {
        if !token.starts_with('<') {
            return None;
        }

        let inner = token.trim_matches(|c| matches!(c, '<' | '>' | '/'));
        let word = inner.split_whitespace().next()?;
        let name = word.to_lowercase().trim_end_matches('/').to_string();

        if name.is_empty() { None } else { Some(name) }
    }

    /// Whether `token` is a tag of this pattern that renders as live formatting
    pub fn renders_live(&self, token: &str) -> bool {
        self.is_tag(token)
            && Self::tag_name(token).is_some_and(|name| self.render_tags.contains(&name))
    }
}
