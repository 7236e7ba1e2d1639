//! Service and barber records as delivered by the catalog endpoints.
//!
//! These mirror the JSON shapes of `/api/services` and `/api/barbers`. The
//! booking flow only reads them; creation and editing stay on the server.

use serde::{Deserialize, Serialize};

use crate::slots::{sanitize_duration, DEFAULT_DURATION_MINUTES};

/// Appointment lifecycle states used by the backend enum.
pub const STATUS_PENDING: &str = "pendiente";
pub const STATUS_CONFIRMED: &str = "confirmada";
pub const STATUS_CANCELLED: &str = "cancelada";
pub const STATUS_COMPLETED: &str = "completada";

/// A bookable service from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub service_id: i64,
    pub name: String,
    pub price: f64,
    /// May be absent in older records; use [`Service::effective_duration`].
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

impl Service {
    /// The duration slot generation should use for this service.
    ///
    /// Missing, zero, or negative values fall back to
    /// [`DEFAULT_DURATION_MINUTES`], matching the permissive behavior the
    /// booking form relies on.
    pub fn effective_duration(&self) -> u32 {
        self.duration_minutes
            .map(sanitize_duration)
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }
}

/// A barber profile as shown on the booking page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barber {
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub specialties: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(duration: Option<i64>) -> Service {
        Service {
            service_id: 1,
            name: "Classic cut".to_string(),
            price: 15.0,
            duration_minutes: duration,
        }
    }

    #[test]
    fn effective_duration_passes_through_valid_values() {
        assert_eq!(service(Some(45)).effective_duration(), 45);
    }

    #[test]
    fn effective_duration_defaults_when_missing_or_invalid() {
        assert_eq!(service(None).effective_duration(), 30);
        assert_eq!(service(Some(0)).effective_duration(), 30);
        assert_eq!(service(Some(-15)).effective_duration(), 30);
    }

    #[test]
    fn service_deserializes_without_duration_field() {
        let svc: Service =
            serde_json::from_str(r#"{"service_id":3,"name":"Shave","price":9.5}"#).unwrap();
        assert_eq!(svc.duration_minutes, None);
        assert_eq!(svc.effective_duration(), 30);
    }
}
