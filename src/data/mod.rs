//! # Parking Data
//!
//! Everything the home screen displays: the lot model, the provider trait
//! with its mock implementation, and the observable service that wraps a
//! provider for one screen.

pub mod mock;
pub mod models;
pub mod provider;
pub mod service;

pub use models::{Location, ParkingLot, TimeSeriesPoint};
pub use provider::{MockParkingProvider, ParkingDataProvider, ProviderError};
pub use service::{FetchStatus, ParkingDataService};
