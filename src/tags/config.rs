/*!
 * Serializable tag configuration.
 */

use serde::{Deserialize, Serialize};

/// Default alternation: `<...>` markup, `{...}` placeholders, `[...]` annotations
pub const DEFAULT_TAG_PATTERN: &str = r"<[^>]+>|\{[^}]+\}|\[[^\]]+\]";

/// Tag names rendered as live formatting in the preview by default
pub const DEFAULT_RENDER_TAGS: &[&str] = &["b", "i", "u", "br", "br/", "strong", "em"];

/// Tag matching and rendering settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TagConfig {
    /// Regex alternation used to find tag tokens
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Lowercase tag names rendered live instead of as chips
    #[serde(default = "default_render_tags")]
    pub render_tags: Vec<String>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            render_tags: default_render_tags(),
        }
    }
}

fn default_pattern() -> String {
    DEFAULT_TAG_PATTERN.to_string()
}

fn default_render_tags() -> Vec<String> {
    DEFAULT_RENDER_TAGS.iter().map(|t| t.to_string()).collect()
}
