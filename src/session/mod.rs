/*!
 * Translation session state.
 *
 * This module provides the state store for one translation job:
 * - `models`: segments, their lifecycle state and progress counters
 * - `manager`: the session object and its operations
 */

pub mod manager;
pub mod models;

pub use manager::TranslationSession;
pub use models::{Segment, SegmentState, SessionStats};
