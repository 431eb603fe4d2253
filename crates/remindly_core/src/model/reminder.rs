//! Reminder domain record.
//!
//! # Responsibility
//! - Define the persisted reminder entity and its constructors.
//!
//! # Invariants
//! - `id` is the unique primary key; a save with an existing `id` replaces
//!   the whole record, never merges fields.
//! - `latitude`/`longitude` are paired by convention (both set or both
//!   absent); the store does not enforce the pairing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted reminder entity.
///
/// All content fields are optional at the storage layer; field validation
/// (e.g. rejecting an empty title) belongs to the caller, not to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderRecord {
    /// Unique primary key. Caller-supplied; the store never generates it.
    pub id: String,
    /// Short user-facing label.
    pub title: Option<String>,
    /// Free-form detail text.
    pub description: Option<String>,
    /// Human-readable place label for the coordinate pair.
    pub location: Option<String>,
    /// Latitude in degrees. Paired with `longitude`.
    pub latitude: Option<f64>,
    /// Longitude in degrees. Paired with `latitude`.
    pub longitude: Option<f64>,
}

impl ReminderRecord {
    /// Creates a record with a freshly generated UUID string id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            title,
            description,
            location,
            latitude,
            longitude,
        )
    }

    /// Creates a record with a caller-provided id.
    ///
    /// Used wherever identity already exists externally; the id must stay
    /// stable for the record's lifetime.
    pub fn with_id(
        id: impl Into<String>,
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            description,
            location,
            latitude,
            longitude,
        }
    }

    /// Returns the coordinate pair when both halves are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
