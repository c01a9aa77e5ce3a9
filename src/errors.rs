/*!
 * Error types for the catwork application.
 *
 * This module contains custom error types for the workbench core and the
 * controller around it, using the thiserror crate for ergonomic
 * error definitions.
 */

use thiserror::Error;

/// Errors raised by the segmentation and translation-state core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkbenchError {
    /// Source text was blank; nothing was loaded
    #[error("Source text is empty, nothing to segment")]
    EmptyInput,

    /// A segment index outside `0..count`
    #[error("Segment index {index} is out of range (document has {count} segment(s))")]
    InvalidIndex {
        /// Requested index
        index: usize,
        /// Number of segments in the document
        count: usize,
    },

    /// Attempt to edit a confirmed segment
    #[error("Segment {index} is confirmed; unconfirm it before editing")]
    SegmentConfirmed {
        /// Index of the locked segment
        index: usize,
    },

    /// Toolbar action with no document loaded
    #[error("No active segment")]
    NoActiveSegment,

    /// The configured tag pattern could not be used
    #[error("Invalid tag pattern: {0}")]
    InvalidPattern(String),
}

/// Error type of the application controller
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the workbench core
    #[error("Workbench error: {0}")]
    Workbench(#[from] WorkbenchError),
}

impl AppError {
    /// File error carrying the full context chain of `error`
    pub fn file(error: anyhow::Error) -> Self {
        Self::File(format!("{:#}", error))
    }

    /// Configuration error carrying the full context chain of `error`
    pub fn config(error: anyhow::Error) -> Self {
        Self::Config(format!("{:#}", error))
    }
}
