/*!
 * # catwork - a tag-aware translation workbench core
 *
 * A Rust library for computer-assisted translation of tagged text.
 *
 * ## Features
 *
 * - Split source text into sentence-level segments
 * - Tokenize inline tags: `<b>`/`</b>` markup, `{1}` placeholders,
 *   `[note]` annotations
 * - Report source tags missing from a translation (multiset diff)
 * - Render an inert highlighted view and a live formatted preview
 * - Track per-segment confirmation with a small state machine
 * - Export translations as blank-line-separated plain text
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `segmenter`: Paragraph and sentence segmentation
 * - `tags`: Tag pattern, tokenizer and render whitelist
 * - `validation`: Missing-tag detection
 * - `render`: Highlight and formatted HTML views
 * - `session`: Translation state store
 * - `export`: Export assembly
 * - `app_config`: Configuration management
 * - `app_controller`: File-driven controller used by the CLI
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod export;
pub mod file_utils;
pub mod render;
pub mod segmenter;
pub mod session;
pub mod tags;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, WorkbenchError};
pub use render::Renderer;
pub use segmenter::Segmenter;
pub use session::{Segment, SegmentState, SessionStats, TranslationSession};
pub use tags::{TagConfig, TagPattern, Token};
pub use validation::missing_tags;
