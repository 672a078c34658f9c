//! Trip records.
//!
//! A trip is the container for everything else: expenses, contributions and
//! balances are all scoped to one trip.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a trip is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Being planned; nothing booked yet.
    #[default]
    Planning,
    /// Booked and upcoming.
    Confirmed,
    /// Currently under way.
    Ongoing,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
}

/// A trip as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Server-assigned identifier.
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub id: String,

    /// Trip title.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Destination name.
    #[serde(default)]
    pub destination: Option<String>,

    /// First day of the trip.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Last day of the trip.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Planned budget in `currency`.
    #[serde(default)]
    pub budget: Option<f64>,

    /// ISO 4217 currency code used for all amounts of the trip.
    #[serde(default)]
    pub currency: Option<String>,

    /// Lifecycle status.
    #[serde(default)]
    pub status: TripStatus,

    /// IDs of the users taking part.
    #[serde(default)]
    pub participant_ids: Vec<String>,

    /// When the trip was created.
    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the trip was last updated.
    #[serde(default, skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trip {
    /// Number of days covered by the trip, both ends included.
    ///
    /// Returns `None` when either date is unknown or the end precedes the
    /// start.
    #[must_use]
    pub fn duration_days(&self) -> Option<i64> {
        let days = (self.end_date? - self.start_date?).num_days();
        (days >= 0).then_some(days + 1)
    }
}

/// Payload for creating a trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    /// Trip title (required).
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl NewTrip {
    /// Creates a payload with only a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update of a trip. Only the fields that are set are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_trip_deserializes_api_shape() {
        let trip: Trip = serde_json::from_value(json!({
            "id": 7,
            "title": "Lisbon",
            "destination": "Lisbon, PT",
            "startDate": "2026-05-01",
            "endDate": "2026-05-05",
            "budget": 1200.5,
            "currency": "EUR",
            "status": "confirmed",
            "participantIds": ["u1", "u2"],
            "createdAt": "2026-01-10T09:30:00Z"
        }))
        .unwrap();

        assert_eq!(trip.id, "7");
        assert_eq!(trip.start_date, Some(date(2026, 5, 1)));
        assert_eq!(trip.status, TripStatus::Confirmed);
        assert_eq!(trip.participant_ids.len(), 2);
        assert!(trip.created_at.is_some());
        assert!(trip.description.is_none());
    }

    #[test]
    fn test_trip_minimal_payload_uses_defaults() {
        let trip: Trip = serde_json::from_value(json!({"id": "t1", "title": "Weekend"})).unwrap();
        assert_eq!(trip.status, TripStatus::Planning);
        assert!(trip.participant_ids.is_empty());
        assert!(trip.duration_days().is_none());
    }

    #[test]
    fn test_duration_days_is_inclusive() {
        let mut trip: Trip =
            serde_json::from_value(json!({"id": 1, "title": "x", "startDate": "2026-05-01", "endDate": "2026-05-05"}))
                .unwrap();
        assert_eq!(trip.duration_days(), Some(5));

        trip.end_date = Some(date(2026, 5, 1));
        assert_eq!(trip.duration_days(), Some(1));

        trip.end_date = Some(date(2026, 4, 30));
        assert!(trip.duration_days().is_none());
    }

    #[test]
    fn test_new_trip_omits_unset_fields() {
        let mut trip = NewTrip::new("Alps");
        trip.start_date = Some(date(2026, 2, 14));

        assert_eq!(
            serde_json::to_value(&trip).unwrap(),
            json!({"title": "Alps", "startDate": "2026-02-14"})
        );
    }

    #[test]
    fn test_trip_update_serializes_only_changes() {
        let update = TripUpdate {
            status: Some(TripStatus::Cancelled),
            ..TripUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"status": "cancelled"})
        );
    }
}
