/*!
 * HTML rendering of segments.
 *
 * Two views are produced from the same tokenization:
 * - highlight: every tag shown as an inert chip, for the source column
 * - formatted: whitelisted tags emitted verbatim as live markup, for the
 *   translation preview
 *
 * Plain text is always escaped, in both views.
 */

use crate::tags::TagPattern;

/// CSS class carried by inert tag chips
pub const CHIP_CLASS: &str = "tag-chip";

/// CSS class of the missing-tag warning box
pub const WARNING_CLASS: &str = "tag-warning";

/// Separator between rendered segments in the preview
pub const PREVIEW_SEPARATOR: &str = "<br><br>";

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Inert chip markup for one tag token
pub fn chip(tag: &str) -> String {
    format!(r#"<span class="{}">{}</span>"#, CHIP_CLASS, escape_html(tag))
}

/// Renders text through a tag pattern
pub struct Renderer<'a> {
    pattern: &'a TagPattern,
}

impl<'a> Renderer<'a> {
    pub fn new(pattern: &'a TagPattern) -> Self {
        Self { pattern }
    }

    /// Inert view: tags as chips, never live formatting
    pub fn highlight(&self, text: &str) -> String {
        self.pattern
            .tokenize(text)
            .iter()
            .map(|token| {
                if token.is_tag {
                    chip(token.value)
                } else {
                    escape_html(token.value)
                }
            })
            .collect()
    }

    /// Live view: whitelisted `<...>` tags pass through, other tags are chips
    pub fn render_formatted(&self, text: &str) -> String {
        self.pattern
            .tokenize(text)
            .iter()
            .map(|token| {
                if !token.is_tag {
                    escape_html(token.value)
                } else if self.pattern.renders_live(token.value) {
                    token.value.to_string()
                } else {
                    chip(token.value)
                }
            })
            .collect()
    }

    /// Formatted view of every non-blank translation, joined for display.
    ///
    /// `None` when nothing has been translated yet.
    pub fn render_preview<I, S>(&self, translations: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rendered: Vec<String> = translations
            .into_iter()
            .filter_map(|t| {
                let trimmed = t.as_ref().trim();
                (!trimmed.is_empty()).then(|| self.render_formatted(trimmed))
            })
            .collect();

        if rendered.is_empty() {
            None
        } else {
            Some(rendered.join(PREVIEW_SEPARATOR))
        }
    }
}

/// Warning box listing missing tags as chips; `None` when nothing is missing
pub fn render_missing_warning(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    let chips: Vec<String> = missing.iter().map(|t| chip(t)).collect();
    Some(format!(
        r#"<div class="{}">Missing tag(s): {}</div>"#,
        WARNING_CLASS,
        chips.join(" ")
    ))
}
