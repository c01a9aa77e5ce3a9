/*!
 * In-memory translation session.
 *
 * This module handles:
 * - Loading and reloading source text into segments
 * - Editing and confirming translations
 * - The active segment targeted by toolbar actions
 * - Progress, tag warnings, preview and export
 *
 * All state lives in one `TranslationSession` and changes only through its
 * methods. Every mutation takes `&mut self`; a host that shares a session
 * between threads must provide its own lock.
 */

use log::{debug, info, warn};

use crate::errors::WorkbenchError;
use crate::export;
use crate::render::Renderer;
use crate::segmenter::Segmenter;
use crate::tags::TagPattern;
use crate::validation::missing_tags;

use super::models::{Segment, SegmentState, SessionStats};

/// Document, confirmation flags and active pointer of one translation job
#[derive(Debug, Clone)]
pub struct TranslationSession {
    /// Tag pattern fixed for the session's lifetime
    tags: TagPattern,
    /// Segments in document order, `segments[i].index() == i`
    segments: Vec<Segment>,
    /// Target of toolbar actions
    active: usize,
}

impl Default for TranslationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationSession {
    /// Create an empty session using the standard tag pattern
    pub fn new() -> Self {
        Self::with_pattern(TagPattern::standard().clone())
    }

    /// Create an empty session with a custom tag pattern
    pub fn with_pattern(tags: TagPattern) -> Self {
        Self {
            tags,
            segments: Vec::new(),
            active: 0,
        }
    }

    pub fn tag_pattern(&self) -> &TagPattern {
        &self.tags
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Segment `raw_text` and replace the document.
    ///
    /// Translations and confirmation flags carry over for indices present in
    /// both the old and the new document; later indices start empty. Blank
    /// input fails with `EmptyInput` and leaves the session untouched.
    pub fn load_source(&mut self, raw_text: &str) -> Result<usize, WorkbenchError> {
        let sources = Segmenter::segment(raw_text);
        if sources.is_empty() {
            warn!("Ignoring blank source text");
            return Err(WorkbenchError::EmptyInput);
        }

        let mut previous = std::mem::take(&mut self.segments).into_iter();
        self.segments = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| {
                let mut segment = Segment::new(index, source);
                if let Some(old) = previous.next() {
                    segment.translated_text = old.translated_text;
                    segment.confirmed = old.confirmed;
                }
                segment
            })
            .collect();

        if self.active >= self.segments.len() {
            self.active = 0;
        }

        info!("Loaded {} segment(s)", self.segments.len());
        Ok(self.segments.len())
    }

    /// Reset every segment to empty and unconfirmed
    pub fn clear_all(&mut self) {
        for segment in &mut self.segments {
            segment.translated_text.clear();
            segment.confirmed = false;
        }
        debug!("Cleared {} translation(s)", self.segments.len());
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get a segment by index
    pub fn segment(&self, index: usize) -> Result<&Segment, WorkbenchError> {
        self.segments.get(index).ok_or(WorkbenchError::InvalidIndex {
            index,
            count: self.segments.len(),
        })
    }

    pub fn state(&self, index: usize) -> Result<SegmentState, WorkbenchError> {
        Ok(self.segment(index)?.state())
    }

    /// Index of the active segment, if a document is loaded
    pub fn active_index(&self) -> Option<usize> {
        (self.active < self.segments.len()).then_some(self.active)
    }

    /// The active segment, or `NoActiveSegment` without a document
    pub fn active_segment(&self) -> Result<&Segment, WorkbenchError> {
        self.active_index()
            .map(|index| &self.segments[index])
            .ok_or(WorkbenchError::NoActiveSegment)
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Replace a segment's translation.
    ///
    /// Confirmed segments are locked: unconfirm before editing.
    pub fn set_translation(&mut self, index: usize, text: &str) -> Result<(), WorkbenchError> {
        let segment = self.editable_segment(index)?;
        segment.translated_text = text.to_string();
        Ok(())
    }

    /// Flip the confirmation flag and return its new value.
    ///
    /// Segments with blank text stay unconfirmed.
    pub fn toggle_confirm(&mut self, index: usize) -> Result<bool, WorkbenchError> {
        let segment = self.segment_mut(index)?;
        if !segment.is_filled() {
            debug!("Segment {} has no translation, not confirming", index);
            return Ok(segment.confirmed);
        }

        segment.confirmed = !segment.confirmed;
        debug!("Segment {} confirmed: {}", index, segment.confirmed);
        Ok(segment.confirmed)
    }

    /// Confirm every filled segment and return how many changed.
    ///
    /// Never unconfirms anything.
    pub fn confirm_all(&mut self) -> usize {
        let mut newly_confirmed = 0;
        for segment in &mut self.segments {
            if segment.is_filled() && !segment.confirmed {
                segment.confirmed = true;
                newly_confirmed += 1;
            }
        }
        debug!("Confirmed {} additional segment(s)", newly_confirmed);
        newly_confirmed
    }

    /// Make `index` the target of toolbar actions.
    ///
    /// Confirmed segments may be selected; edit guards apply when acting.
    pub fn set_active(&mut self, index: usize) -> Result<(), WorkbenchError> {
        self.segment(index)?;
        self.active = index;
        Ok(())
    }

    /// Append `open_tag + close_tag` to the active segment.
    ///
    /// Returns `false` without a document.
    pub fn insert_at_active(&mut self, open_tag: &str, close_tag: &str) -> Result<bool, WorkbenchError> {
        self.append_to_active(&format!("{}{}", open_tag, close_tag))
    }

    /// Append the active segment's source tags, in order and unseparated.
    ///
    /// Returns `false` without a document.
    pub fn copy_source_tags_to_active(&mut self) -> Result<bool, WorkbenchError> {
        let tags = match self.active_segment() {
            Ok(segment) => self.tags.extract_tags(segment.source_text()).concat(),
            Err(_) => {
                debug!("No active segment, nothing to copy");
                return Ok(false);
            }
        };
        self.append_to_active(&tags)
    }

    fn append_to_active(&mut self, text: &str) -> Result<bool, WorkbenchError> {
        let Some(index) = self.active_index() else {
            debug!("{}, ignoring toolbar action", WorkbenchError::NoActiveSegment);
            return Ok(false);
        };

        let segment = self.editable_segment(index)?;
        segment.translated_text.push_str(text);
        Ok(true)
    }

    fn segment_mut(&mut self, index: usize) -> Result<&mut Segment, WorkbenchError> {
        let count = self.segments.len();
        self.segments
            .get_mut(index)
            .ok_or(WorkbenchError::InvalidIndex { index, count })
    }

    fn editable_segment(&mut self, index: usize) -> Result<&mut Segment, WorkbenchError> {
        let segment = self.segment_mut(index)?;
        if segment.confirmed {
            warn!("Refusing to edit confirmed segment {}", index);
            return Err(WorkbenchError::SegmentConfirmed { index });
        }
        Ok(segment)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Source tags missing from a segment's translation
    pub fn missing_tags(&self, index: usize) -> Result<Vec<String>, WorkbenchError> {
        let segment = self.segment(index)?;
        Ok(missing_tags(&self.tags, segment.source_text(), segment.translated_text()))
    }

    /// Segments that have text but lack source tags, with what is missing
    pub fn tag_warnings(&self) -> Vec<(usize, Vec<String>)> {
        self.segments
            .iter()
            .filter(|s| s.is_filled())
            .filter_map(|s| {
                let missing = missing_tags(&self.tags, s.source_text(), s.translated_text());
                (!missing.is_empty()).then(|| (s.index(), missing))
            })
            .collect()
    }

    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats {
            segment_count: self.segments.len(),
            ..Default::default()
        };
        for segment in &self.segments {
            match segment.state() {
                SegmentState::Pending => stats.pending_count += 1,
                SegmentState::InProgress => stats.in_progress_count += 1,
                SegmentState::Confirmed => stats.confirmed_count += 1,
            }
        }
        stats
    }

    /// Highlighted source text of a segment
    pub fn highlight_source(&self, index: usize) -> Result<String, WorkbenchError> {
        Ok(Renderer::new(&self.tags).highlight(self.segment(index)?.source_text()))
    }

    /// Formatted preview of all translated segments
    pub fn preview(&self) -> Option<String> {
        Renderer::new(&self.tags).render_preview(self.segments.iter().map(|s| s.translated_text()))
    }

    /// All translations joined for export
    pub fn export(&self) -> String {
        export::assemble(&self.segments)
    }
}
