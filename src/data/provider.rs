use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::mock::mock_parking_lot;
use super::models::ParkingLot;

/// Errors a data provider can report.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The backend could not be reached or refused the request.
    Unavailable(String),
    /// `start` is after `end`.
    InvalidRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(msg) => write!(f, "data unavailable: {msg}"),
            ProviderError::InvalidRange { start, end } => {
                write!(f, "invalid range: {} is after {}", start.to_rfc3339(), end.to_rfc3339())
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// A source of parking lot snapshots. The mock provider and a real backend
/// client are interchangeable behind this trait.
#[async_trait]
pub trait ParkingDataProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Fetches the current snapshot of every lot.
    async fn fetch(&self) -> Result<Vec<ParkingLot>, ProviderError>;

    /// Fetches lots with their time series limited to `start..=end`.
    ///
    /// The default filters a full `fetch()` locally. Providers with a
    /// server-side range query should override it.
    async fn fetch_for_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ParkingLot>, ProviderError> {
        if start > end {
            return Err(ProviderError::InvalidRange { start, end });
        }
        let lots = self.fetch().await?;
        Ok(lots.iter().map(|lot| lot.within(start, end)).collect())
    }
}

pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_secs(1);

/// Serves one synthetic lot after a simulated network delay.
pub struct MockParkingProvider {
    latency: Duration,
    rng: Mutex<StdRng>,
}

impl MockParkingProvider {
    /// `seed` pins the generated series; `None` draws from OS entropy.
    pub fn new(latency: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            latency,
            rng: Mutex::new(rng),
        }
    }

    pub fn shared(latency: Duration, seed: Option<u64>) -> Arc<dyn ParkingDataProvider> {
        Arc::new(Self::new(latency, seed))
    }
}

impl Default for MockParkingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_LATENCY, None)
    }
}

#[async_trait]
impl ParkingDataProvider for MockParkingProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<ParkingLot>, ProviderError> {
        debug!("Mock fetch: sleeping {:?}", self.latency);
        tokio::time::sleep(self.latency).await;

        let now = Utc::now();
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let lot = mock_parking_lot(&mut *rng, now);
        Ok(vec![lot])
    }
}
