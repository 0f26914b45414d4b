//! # Parking Data Model
//!
//! The analytics record shown on the home screen. Field names serialize in
//! camelCase so a JSON payload from a real backend maps straight onto these
//! types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

/// One timestamped occupancy sample.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Local identity for list rendering. Never encoded.
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub occupancy: u32,
    pub predicted_occupancy: Option<u32>,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, occupancy: u32, predicted_occupancy: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            occupancy,
            predicted_occupancy,
        }
    }
}

// Identity is local bookkeeping, so equality ignores `id`.
impl PartialEq for TimeSeriesPoint {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
            && self.occupancy == other.occupancy
            && self.predicted_occupancy == other.predicted_occupancy
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    pub id: String,
    pub name: String,
    pub location: Location,
    pub capacity: u32,
    pub current_occupancy: u32,
    /// Oldest first.
    #[serde(rename = "timeSeriesData")]
    pub time_series: Vec<TimeSeriesPoint>,
    pub last_updated: DateTime<Utc>,
}

impl ParkingLot {
    /// Share of capacity in use, 0-100. Zero for a lot with no capacity.
    pub fn occupancy_percentage(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.current_occupancy) / f64::from(self.capacity) * 100.0
    }

    /// Free spaces. Negative when the lot reports more cars than spaces.
    pub fn available_spaces(&self) -> i64 {
        i64::from(self.capacity) - i64::from(self.current_occupancy)
    }

    /// Copy of this lot keeping only samples with `start <= timestamp <= end`.
    pub fn within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> ParkingLot {
        ParkingLot {
            time_series: self
                .time_series
                .iter()
                .filter(|p| p.timestamp >= start && p.timestamp <= end)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}
