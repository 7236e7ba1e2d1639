//! WASM bindings for booking-engine.
//!
//! Exposes slot generation, the segment catalog, appointment date-time
//! assembly, and session decoding to the JavaScript front end via
//! `wasm-bindgen`. All complex values cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/booking-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use booking_engine::{Session, SEGMENTS};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SessionDto {
    user_id: Option<i64>,
    role: Option<&'static str>,
    is_admin: bool,
}

impl From<&Session> for SessionDto {
    fn from(s: &Session) -> Self {
        Self {
            user_id: s.user_id(),
            role: s.role().map(|r| r.as_str()),
            is_admin: s.is_admin(),
        }
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the bookable `HH:MM` start times for a segment and duration.
///
/// Returns a JSON array of strings. An unknown or empty segment name yields
/// `[]`; a duration that is not a positive integer falls back to 30 minutes.
/// The duration arrives as a JS `number`, so fractional and non-finite values
/// are treated as invalid here before reaching the core.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(segment: &str, duration_minutes: f64) -> Result<String, JsValue> {
    let duration = if duration_minutes.is_finite() && duration_minutes.fract() == 0.0 {
        duration_minutes as i64
    } else {
        0 // sanitized to the default by the core
    };

    let slots = booking_engine::generate(segment, duration);
    serde_json::to_string(&slots)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The fixed segment catalog as a JSON array of `{name, label, start, end}`
/// objects, with bounds in minutes since midnight, in display order.
#[wasm_bindgen(js_name = "segmentCatalog")]
pub fn segment_catalog() -> Result<String, JsValue> {
    serde_json::to_string(SEGMENTS)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` slot into the
/// `YYYY-MM-DDTHH:MM:00` string the booking endpoint expects.
#[wasm_bindgen(js_name = "combineAppointment")]
pub fn combine_appointment(date: &str, time: &str) -> Result<String, JsValue> {
    booking_engine::combine(date, time).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode the session carried by an access token.
///
/// Returns JSON `{user_id, role, is_admin}`. Invalid tokens produce the
/// anonymous shape (`null` fields, `is_admin: false`) rather than an error.
#[wasm_bindgen(js_name = "decodeSession")]
pub fn decode_session(token: &str) -> Result<String, JsValue> {
    let session = Session::from_token(token);
    serde_json::to_string(&SessionDto::from(&session))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_round_trip_as_json() {
        let json = generate_slots("afternoon", 60.0).unwrap();
        let slots: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(slots, vec!["13:00", "14:00", "15:00", "16:00"]);
    }

    #[test]
    fn fractional_durations_fall_back_to_default() {
        assert_eq!(
            generate_slots("morning", 29.5).unwrap(),
            generate_slots("morning", 30.0).unwrap()
        );
        assert_eq!(
            generate_slots("morning", f64::NAN).unwrap(),
            generate_slots("morning", 30.0).unwrap()
        );
    }

    #[test]
    fn oversized_durations_yield_no_slots() {
        let json = generate_slots("morning", 1e15).unwrap();
        let slots: Vec<String> = serde_json::from_str(&json).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn catalog_exposes_three_segments() {
        let json = segment_catalog().unwrap();
        let segments: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(segments.as_array().unwrap().len(), 3);
        assert_eq!(segments[0]["name"], "morning");
        assert_eq!(segments[0]["start"], 540);
    }

    #[test]
    fn anonymous_session_shape_for_bad_tokens() {
        let json = decode_session("garbage").unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["user_id"].is_null());
        assert!(v["role"].is_null());
        assert_eq!(v["is_admin"], false);
    }
}
