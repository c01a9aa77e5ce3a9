/*!
 * Export of translated documents.
 *
 * The export format is plain UTF-8: every segment's translation in index
 * order, separated by one blank line, with no header or footer. Empty and
 * unconfirmed translations are included as they are.
 */

use crate::session::Segment;

/// Separator placed between segment translations
pub const SEGMENT_SEPARATOR: &str = "\n\n";

/// Join segment translations in order
pub fn assemble(segments: &[Segment]) -> String {
    join_translations(segments.iter().map(|s| s.translated_text()))
}

/// Join raw translation strings in order
pub fn join_translations<I, S>(translations: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = translations.into_iter().collect();
    let parts: Vec<&str> = parts.iter().map(|t| t.as_ref()).collect();
    parts.join(SEGMENT_SEPARATOR)
}

/// Default export filename for a target language name.
///
/// `"British English"` becomes `translation_british_english.txt`.
pub fn suggested_filename(target_language: &str) -> String {
    let language = target_language.trim().to_lowercase().replace(' ', "_");
    if language.is_empty() {
        "translation.txt".to_string()
    } else {
        format!("translation_{}.txt", language)
    }
}
