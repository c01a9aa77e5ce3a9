/*!
 * Segment and progress models for a translation session.
 */

use serde::{Deserialize, Serialize};

/// Lifecycle state of a segment, derived from its text and flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentState {
    /// No translation yet
    Pending,
    /// Translation typed but not confirmed
    InProgress,
    /// Translation locked until unconfirmed
    Confirmed,
}

impl SegmentState {
    /// Get a human-readable state string
    pub fn display(&self) -> &'static str {
        match self {
            SegmentState::Pending => "Pending",
            SegmentState::InProgress => "In Progress",
            SegmentState::Confirmed => "Confirmed",
        }
    }
}

impl std::fmt::Display for SegmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One translation unit.
///
/// The source text is fixed at load time; translation and confirmation are
/// changed only through `TranslationSession`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    index: usize,
    source_text: String,
    pub(crate) translated_text: String,
    pub(crate) confirmed: bool,
}

impl Segment {
    pub(crate) fn new(index: usize, source_text: String) -> Self {
        Self {
            index,
            source_text,
            translated_text: String::new(),
            confirmed: false,
        }
    }

    /// Position in the document (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Whether the trimmed translation is non-empty
    pub fn is_filled(&self) -> bool {
        !self.translated_text.trim().is_empty()
    }

    pub fn state(&self) -> SegmentState {
        if self.confirmed {
            SegmentState::Confirmed
        } else if self.is_filled() {
            SegmentState::InProgress
        } else {
            SegmentState::Pending
        }
    }
}

/// Progress snapshot of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Total segments
    pub segment_count: usize,
    /// Segments confirmed
    pub confirmed_count: usize,
    /// Segments with text but not confirmed
    pub in_progress_count: usize,
    /// Segments without text
    pub pending_count: usize,
}

impl SessionStats {
    /// Segments with non-blank text, confirmed or not
    pub fn filled_count(&self) -> usize {
        self.confirmed_count + self.in_progress_count
    }

    /// Filled share of the document, rounded down
    pub fn progress_percent(&self) -> usize {
        if self.segment_count == 0 {
            return 0;
        }
        self.filled_count() * 100 / self.segment_count
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segments: {} | Translated: {} | Confirmed: {} | In progress: {} | Pending: {} | Progress: {}%",
            self.segment_count,
            self.filled_count(),
            self.confirmed_count,
            self.in_progress_count,
            self.pending_count,
            self.progress_percent()
        )
    }
}
