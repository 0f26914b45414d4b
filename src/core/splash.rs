//! # Splash
//!
//! The title is typed out one character per timer tick. Only the eventual
//! hand-off to the login screen matters to the state machine; the reveal
//! is cosmetic.

pub const SPLASH_TITLE: &str = "BrainWave Analytics";
pub const SPLASH_SUBTITLE: &str = "Parking Lot Analytics Platform";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SplashState {
    revealed: usize,
}

impl SplashState {
    /// Number of characters in the title, which is also the number of ticks.
    pub fn title_len() -> usize {
        SPLASH_TITLE.chars().count()
    }

    /// Reveal one more character. Returns false once the title is complete.
    pub fn reveal_next(&mut self) -> bool {
        if self.is_revealed() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn visible_text(&self) -> String {
        SPLASH_TITLE.chars().take(self.revealed).collect()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed >= Self::title_len()
    }
}
