//! The fixed day-segment catalog.
//!
//! A segment is a named sub-interval of the business day within which
//! appointments may be scheduled. The catalog is plain data so new segments
//! can be added without touching the slot-generation algorithm.

use serde::Serialize;

/// A named interval of the business day, bounded in minutes since midnight.
///
/// Invariant: `start < end`. Segments need not be contiguous — there is a
/// lunch gap between `morning` (ends 12:00) and `afternoon` (starts 13:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySegment {
    /// Stable key used by callers to select a segment (e.g., "morning").
    pub name: &'static str,
    /// Human-readable label for display.
    pub label: &'static str,
    /// Inclusive lower bound, minutes since midnight.
    pub start: u32,
    /// Exclusive upper bound for slot ends, minutes since midnight.
    pub end: u32,
}

impl DaySegment {
    /// Length of the segment in minutes.
    pub fn span_minutes(&self) -> u32 {
        self.end - self.start
    }
}

/// The ordered segment catalog. Bounds must match the booking backend exactly:
/// morning 09:00–12:00, afternoon 13:00–17:00, evening 17:00–20:00.
pub const SEGMENTS: &[DaySegment] = &[
    DaySegment {
        name: "morning",
        label: "Morning",
        start: 9 * 60,
        end: 12 * 60,
    },
    DaySegment {
        name: "afternoon",
        label: "Afternoon",
        start: 13 * 60,
        end: 17 * 60,
    },
    DaySegment {
        name: "evening",
        label: "Evening",
        start: 17 * 60,
        end: 20 * 60,
    },
];

/// Look up a segment by its catalog key.
///
/// An unknown or empty name returns `None` — that is the normal
/// "nothing chosen yet" state in the booking form, not an error.
pub fn find_segment(name: &str) -> Option<&'static DaySegment> {
    SEGMENTS.iter().find(|s| s.name == name)
}
