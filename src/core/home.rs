//! # Home
//!
//! Dashboard state. The data service lives here so it is created when the
//! home screen is entered and dropped with it.

use std::sync::Arc;

use chrono::{TimeZone, Timelike};

use crate::data::mock::SAMPLE_INTERVAL_MINUTES;
use crate::data::{FetchStatus, ParkingDataService, ParkingLot, TimeSeriesPoint};

/// Slider positions: 48 half-hour slots plus the closing 24:00 mark.
pub const TIME_SLOT_MAX: usize = 48;
pub const DEFAULT_TIME_SLOT: usize = 24;

pub const MENU_SECTIONS: &[(&str, &[&str])] = &[
    ("Analytics", &["Dashboard", "Parking Analytics", "Historical Data"]),
    ("Settings", &["Preferences", "Help", "About"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Profile,
    Menu,
}

/// Numbers shown on the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeStats {
    /// Whole percent, truncated.
    pub occupancy_percent: i64,
    pub available: i64,
    pub total: u32,
}

impl HomeStats {
    pub fn from_lot(lot: Option<&ParkingLot>) -> Self {
        match lot {
            Some(lot) => Self {
                occupancy_percent: lot.occupancy_percentage() as i64,
                available: lot.available_spaces(),
                total: lot.capacity,
            },
            None => Self::default(),
        }
    }
}

/// `HH:MM` label for a slider slot.
pub fn format_time_slot(slot: usize) -> String {
    format!("{:02}:{:02}", slot / 2, (slot % 2) * 30)
}

/// The sample taken during the half hour the slot labels, read in `tz`.
///
/// The series is anchored at fetch time, so a slot maps to whichever point's
/// time of day falls in `[slot time, slot time + 30 min)`. Slot 48 (`24:00`) has none.
pub fn point_for_slot<'a, Tz: TimeZone>(
    lot: &'a ParkingLot,
    slot: usize,
    tz: &Tz,
) -> Option<&'a TimeSeriesPoint> {
    let start = u32::try_from(slot).ok()?.checked_mul(SAMPLE_INTERVAL_MINUTES as u32)?;
    let end = start.saturating_add(SAMPLE_INTERVAL_MINUTES as u32);
    lot.time_series.iter().rev().find(|point| {
        let local = point.timestamp.with_timezone(tz);
        (start..end).contains(&(local.hour() * 60 + local.minute()))
    })
}

pub struct HomeState {
    service: Arc<ParkingDataService>,
    selected_slot: usize,
    overlay: Option<Overlay>,
}

impl HomeState {
    pub fn new(service: ParkingDataService) -> Self {
        Self {
            service: Arc::new(service),
            selected_slot: DEFAULT_TIME_SLOT,
            overlay: None,
        }
    }

    pub fn service(&self) -> &Arc<ParkingDataService> {
        &self.service
    }

    pub fn status(&self) -> FetchStatus {
        self.service.snapshot()
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    pub(crate) fn slot_backward(&mut self) {
        self.selected_slot = self.selected_slot.saturating_sub(1);
    }

    pub(crate) fn slot_forward(&mut self) {
        self.selected_slot = (self.selected_slot + 1).min(TIME_SLOT_MAX);
    }

    /// Opens `overlay`, or closes it if it is already showing.
    pub(crate) fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == Some(overlay) { None } else { Some(overlay) };
    }

    pub(crate) fn close_overlay(&mut self) {
        self.overlay = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockParkingProvider;
    use crate::data::mock::mock_parking_lot;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn home() -> HomeState {
        HomeState::new(ParkingDataService::new(MockParkingProvider::shared(Duration::ZERO, Some(1))))
    }

    #[test]
    fn test_format_time_slot() {
        assert_eq!(format_time_slot(0), "00:00");
        assert_eq!(format_time_slot(1), "00:30");
        assert_eq!(format_time_slot(24), "12:00");
        assert_eq!(format_time_slot(47), "23:30");
    }

    #[test]
    fn test_slot_is_clamped() {
        let mut home = home();
        assert_eq!(home.selected_slot(), DEFAULT_TIME_SLOT);
        for _ in 0..100 {
            home.slot_forward();
        }
        assert_eq!(home.selected_slot(), TIME_SLOT_MAX);
        for _ in 0..100 {
            home.slot_backward();
        }
        assert_eq!(home.selected_slot(), 0);
    }

    #[test]
    fn test_overlay_toggles() {
        let mut home = home();
        home.toggle_overlay(Overlay::Profile);
        assert_eq!(home.overlay(), Some(Overlay::Profile));
        home.toggle_overlay(Overlay::Menu);
        assert_eq!(home.overlay(), Some(Overlay::Menu));
        home.toggle_overlay(Overlay::Menu);
        assert_eq!(home.overlay(), None);
    }

    #[test]
    fn test_stats_without_data_are_zero() {
        assert_eq!(HomeStats::from_lot(None), HomeStats::default());
    }

    #[test]
    fn test_stats_for_mock_lot() {
        let lot = mock_parking_lot(&mut StdRng::seed_from_u64(1), Utc::now());
        let stats = HomeStats::from_lot(Some(&lot));
        assert_eq!(stats.occupancy_percent, 66);
        assert_eq!(stats.available, 24);
        assert_eq!(stats.total, 72);
    }

    #[test]
    fn test_point_for_slot_matches_slot_clock_time() {
        let anchor = Utc.with_ymd_and_hms(2025, 7, 12, 17, 43, 0).unwrap();
        let lot = mock_parking_lot(&mut StdRng::seed_from_u64(1), anchor);

        for slot in 0..TIME_SLOT_MAX {
            let point = point_for_slot(&lot, slot, &Utc).unwrap();
            let label = format_time_slot(slot);
            assert_eq!(point.timestamp.format("%H").to_string(), &label[..2]);
            assert_eq!(point.timestamp.minute() >= 30, slot % 2 == 1, "slot {label}");
        }

        let noon = point_for_slot(&lot, 24, &Utc).unwrap();
        assert_eq!(noon.timestamp.format("%H:%M").to_string(), "12:13");
        let latest = point_for_slot(&lot, 35, &Utc).unwrap();
        assert_eq!(latest.timestamp, anchor);
        let earliest = point_for_slot(&lot, 36, &Utc).unwrap();
        assert_eq!(earliest, &lot.time_series[0]);
        assert_eq!(earliest.timestamp.format("%d %H:%M").to_string(), "11 18:13");
    }

    #[test]
    fn test_closing_slot_has_no_sample() {
        let anchor = Utc.with_ymd_and_hms(2025, 7, 12, 17, 43, 0).unwrap();
        let lot = mock_parking_lot(&mut StdRng::seed_from_u64(1), anchor);
        assert!(point_for_slot(&lot, TIME_SLOT_MAX, &Utc).is_none());
    }
}
