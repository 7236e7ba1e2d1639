//! Availability slot generation.
//!
//! Walks forward from a segment's start in steps of the service duration,
//! emitting every start time whose appointment fits entirely inside the
//! segment. Pure and deterministic — identical inputs always reproduce the
//! identical sequence, because the result drives UI selection state and the
//! payload sent to the booking endpoint.

use crate::error::{BookingError, Result};
use crate::segment::{find_segment, DaySegment};

/// Duration substituted when the caller passes an invalid service duration.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Format minutes-since-midnight as zero-padded 24-hour `HH:MM`.
pub fn format_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a zero-padded 24-hour `HH:MM` string into minutes since midnight.
///
/// # Errors
/// Returns `BookingError::InvalidTime` when the string is not `HH:MM` or the
/// hour/minute components are out of range.
pub fn parse_hhmm(hhmm: &str) -> Result<u32> {
    let invalid = || BookingError::InvalidTime(hhmm.to_string());

    let (h, m) = hhmm.split_once(':').ok_or_else(invalid)?;
    if h.len() != 2 || m.len() != 2 {
        return Err(invalid());
    }
    let hours: u32 = h.parse().map_err(|_| invalid())?;
    let mins: u32 = m.parse().map_err(|_| invalid())?;
    if hours > 23 || mins > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + mins)
}

/// Compute every bookable start time (minutes since midnight) within a segment.
///
/// A start `t` is emitted iff `t + duration <= segment.end`; the cursor then
/// advances by `duration`, so consecutive appointments never overlap and no
/// partial trailing slot is ever produced. A zero duration is substituted with
/// [`DEFAULT_DURATION_MINUTES`] rather than looping forever.
pub fn slot_starts(segment: &DaySegment, duration_minutes: u32) -> Vec<u32> {
    let duration = if duration_minutes == 0 {
        DEFAULT_DURATION_MINUTES
    } else {
        duration_minutes
    };

    let mut starts = Vec::new();
    let mut t = segment.start;
    // Written as a subtraction to stay overflow-safe for huge durations.
    while duration <= segment.end - t {
        starts.push(t);
        t += duration;
    }
    starts
}

/// Generate the `HH:MM` slot list for a named segment — the entry point the
/// booking form calls with unvalidated user input.
///
/// Unknown or unselected (`""`) segment names yield an empty list. A duration
/// that is not a positive integer falls back to [`DEFAULT_DURATION_MINUTES`].
/// Neither case is an error: "no valid slots yet" is a normal form state.
pub fn generate(segment_name: &str, duration_minutes: i64) -> Vec<String> {
    let Some(segment) = find_segment(segment_name) else {
        return Vec::new();
    };
    slot_starts(segment, sanitize_duration(duration_minutes))
        .into_iter()
        .map(format_hhmm)
        .collect()
}

/// Normalize a raw duration. Only non-positive values take the default;
/// positive values beyond `u32` saturate, so an oversized duration walks the
/// segment zero times and yields no slots — same as any duration longer than
/// the segment span.
pub(crate) fn sanitize_duration(raw: i64) -> u32 {
    if raw <= 0 {
        return DEFAULT_DURATION_MINUTES;
    }
    u32::try_from(raw).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_is_zero_padded() {
        assert_eq!(format_hhmm(540), "09:00");
        assert_eq!(format_hhmm(1155), "19:15");
        assert_eq!(format_hhmm(5), "00:05");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!(parse_hhmm("09:00").unwrap(), 540);
        assert_eq!(parse_hhmm("19:15").unwrap(), 1155);

        assert!(parse_hhmm("9:00").is_err());
        assert!(parse_hhmm("09:0").is_err());
        assert!(parse_hhmm("24:00").is_err());
        assert!(parse_hhmm("09:60").is_err());
        assert!(parse_hhmm("0900").is_err());
        assert!(parse_hhmm("").is_err());
    }

    #[test]
    fn sanitize_substitutes_default_for_non_positive_only() {
        assert_eq!(sanitize_duration(45), 45);
        assert_eq!(sanitize_duration(0), DEFAULT_DURATION_MINUTES);
        assert_eq!(sanitize_duration(-30), DEFAULT_DURATION_MINUTES);
        // Oversized positive durations stay oversized so they yield no slots.
        assert_eq!(sanitize_duration(i64::MAX), u32::MAX);
        assert_eq!(sanitize_duration(i64::from(u32::MAX) + 1), u32::MAX);
    }
}
