//! # Mock Parking Data
//!
//! Synthetic stand-in for a drone ingestion pipeline. Generation takes the
//! RNG and the anchor time as arguments so tests can pin both.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use super::models::{Location, ParkingLot, TimeSeriesPoint};

pub const MOCK_LOT_ID: &str = "mock_lot_1";
pub const MOCK_LOT_NAME: &str = "Downtown Parking Garage";
pub const MOCK_CAPACITY: u32 = 72;
pub const MOCK_CURRENT_OCCUPANCY: u32 = 48;

/// Number of samples in a generated series (24 hours at 30-minute resolution).
pub const SERIES_POINTS: usize = 48;
/// How many of the newest samples carry a prediction.
pub const PREDICTED_POINTS: usize = 24;
pub const SAMPLE_INTERVAL_MINUTES: i64 = 30;

const BASE_OCCUPANCY: i32 = 30;

/// Builds the 48-point series ending at `now`, oldest first.
///
/// Points are produced newest first (the newest 24 get a prediction) and
/// reversed before returning.
pub fn generate_time_series<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<TimeSeriesPoint> {
    let max = MOCK_CAPACITY as i32;
    let mut points = Vec::with_capacity(SERIES_POINTS);

    for i in 0..SERIES_POINTS {
        let timestamp = now - Duration::minutes(i as i64 * SAMPLE_INTERVAL_MINUTES);
        let variation: i32 = rng.random_range(-10..=15);
        let occupancy = (BASE_OCCUPANCY + variation).clamp(0, max);

        let predicted = if i < PREDICTED_POINTS {
            let delta: i32 = rng.random_range(-5..=10);
            Some((occupancy + delta).clamp(0, max) as u32)
        } else {
            None
        };

        points.push(TimeSeriesPoint::new(timestamp, occupancy as u32, predicted));
    }

    points.reverse();
    points
}

/// The single hard-coded lot served by the mock provider.
pub fn mock_parking_lot<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> ParkingLot {
    ParkingLot {
        id: MOCK_LOT_ID.to_string(),
        name: MOCK_LOT_NAME.to_string(),
        location: Location {
            latitude: 40.7128,
            longitude: -74.0060,
            address: "123 Main St, New York, NY".to_string(),
        },
        capacity: MOCK_CAPACITY,
        current_occupancy: MOCK_CURRENT_OCCUPANCY,
        time_series: generate_time_series(rng, now),
        last_updated: now,
    }
}
