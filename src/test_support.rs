//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::Timing;
use crate::core::state::App;
use crate::data::mock::mock_parking_lot;
use crate::data::{ParkingDataProvider, ParkingLot, ProviderError};

/// A provider that always fails.
pub struct FailingProvider;

#[async_trait]
impl ParkingDataProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self) -> Result<Vec<ParkingLot>, ProviderError> {
        Err(ProviderError::Unavailable("always fails".to_string()))
    }
}

#[derive(Default)]
struct Script {
    fail: Option<String>,
    delay: Option<Duration>,
    name: Option<String>,
}

/// A provider whose next response can be tweaked from the test body.
/// Each tweak applies to exactly one fetch, taken when that fetch starts.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<Script>,
}

impl ScriptedProvider {
    pub fn fail_next(&self, message: &str) {
        self.script.lock().unwrap().fail = Some(message.to_string());
    }

    pub fn delay_next(&self, delay: Duration) {
        self.script.lock().unwrap().delay = Some(delay);
    }

    pub fn rename_next(&self, name: &str) {
        self.script.lock().unwrap().name = Some(name.to_string());
    }
}

#[async_trait]
impl ParkingDataProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self) -> Result<Vec<ParkingLot>, ProviderError> {
        let script = std::mem::take(&mut *self.script.lock().unwrap());
        if let Some(delay) = script.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = script.fail {
            return Err(ProviderError::Unavailable(message));
        }
        let mut lot = mock_parking_lot(&mut StdRng::seed_from_u64(9), Utc::now());
        if let Some(name) = script.name {
            lot.name = name;
        }
        Ok(vec![lot])
    }
}

/// Millisecond-scale timings so timer-driven tests finish quickly.
pub fn fast_timing() -> Timing {
    Timing {
        splash_char_interval: Duration::from_millis(1),
        splash_pause: Duration::from_millis(5),
        sign_in_delay: Duration::from_millis(5),
        demo_sign_in_delay: Duration::from_millis(5),
        fetch_latency: Duration::from_millis(5),
    }
}

/// Creates a test App backed by an instant, seeded mock provider.
pub fn test_app() -> App {
    test_app_with(crate::data::MockParkingProvider::shared(Duration::ZERO, Some(1)))
}

pub fn test_app_with(provider: Arc<dyn ParkingDataProvider>) -> App {
    App::new(provider)
}

/// Draws into an in-memory terminal and returns the screen as text, one row per line.
pub fn render_to_string(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame),
) -> String {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
