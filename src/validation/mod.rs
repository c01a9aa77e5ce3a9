/*!
 * Validation module for translation quality assurance.
 *
 * - `tags`: checks that every source tag occurrence survives in the
 *   translation
 */

pub mod tags;

// Re-export main types
pub use tags::{missing_tags, TagEntryResult, TagValidationResult, TagValidator};
