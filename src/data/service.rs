//! # Parking Data Service
//!
//! Observable wrapper around a [`ParkingDataProvider`]. The home screen owns
//! one instance and reads [`FetchStatus`] from it while fetches run on
//! background tasks.
//!
//! ```text
//! fetch() ──► loading=true, error=None ──► provider ──► Ok  → lots replaced
//!                                                   └─► Err → error set, lots kept
//! ```
//!
//! Every request takes a ticket from a generation counter. A result is only
//! applied if its ticket is still the newest, so an older fetch that finishes
//! late cannot overwrite a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use tokio::sync::watch;

use super::models::ParkingLot;
use super::provider::{ParkingDataProvider, ProviderError};

/// What the display layer sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchStatus {
    pub loading: bool,
    pub error: Option<String>,
    pub lots: Vec<ParkingLot>,
}

impl FetchStatus {
    /// The lot shown on the home screen.
    pub fn primary_lot(&self) -> Option<&ParkingLot> {
        self.lots.first()
    }
}

pub struct ParkingDataService {
    provider: Arc<dyn ParkingDataProvider>,
    status: watch::Sender<FetchStatus>,
    latest: AtomicU64,
}

impl ParkingDataService {
    pub fn new(provider: Arc<dyn ParkingDataProvider>) -> Self {
        let (status, _) = watch::channel(FetchStatus::default());
        Self {
            provider,
            status,
            latest: AtomicU64::new(0),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Subscribe to status changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchStatus> {
        self.status.subscribe()
    }

    /// Clone of the current status.
    pub fn snapshot(&self) -> FetchStatus {
        self.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().loading
    }

    /// Fetch every lot and publish the outcome.
    pub async fn fetch(&self) {
        let ticket = self.begin();
        let result = self.provider.fetch().await;
        self.finish(ticket, result);
    }

    /// Fetch lots with their series limited to `start..=end` and publish the outcome.
    pub async fn fetch_for_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) {
        let ticket = self.begin();
        let result = self.provider.fetch_for_range(start, end).await;
        self.finish(ticket, result);
    }

    // The counter is bumped and compared while holding the watch lock, so a
    // result can never be published after a newer request has started.
    fn begin(&self) -> u64 {
        let mut ticket = 0;
        self.status.send_modify(|status| {
            ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            status.loading = true;
            status.error = None;
        });
        info!("Fetch #{} started ({})", ticket, self.provider.name());
        ticket
    }

    fn finish(&self, ticket: u64, result: Result<Vec<ParkingLot>, ProviderError>) {
        let applied = self.status.send_if_modified(|status| {
            if self.latest.load(Ordering::SeqCst) != ticket {
                return false;
            }
            status.loading = false;
            match result {
                Ok(lots) => {
                    info!("Fetch #{} delivered {} lot(s)", ticket, lots.len());
                    status.lots = lots;
                }
                Err(e) => {
                    warn!("Fetch #{} failed: {}", ticket, e);
                    status.error = Some(e.to_string());
                }
            }
            true
        });
        if !applied {
            debug!("Fetch #{} superseded, discarding result", ticket);
        }
    }
}
