//! # TUI Components
//!
//! One component per screen plus the shared chrome.
//!
//! ## Component Architecture
//!
//! Every component is a props struct implementing [`Component`]: the
//! caller fills in the fields from `App` each frame and calls `render()`.
//! Components never see `App` itself, so they can be rendered in tests
//! with hand-built props.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! HomeView { status: &status, selected_slot: 24, spinner_frame }.render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! HomeView::render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (Top status bar)
//! ├── splash.rs     (Typed-out title)
//! ├── login.rs      (Sign-in buttons)
//! ├── tutorial.rs   (Onboarding pages)
//! ├── home.rs       (Dashboard)
//! └── overlay.rs    (Profile and menu popups)
//! ```
//!
//! [`Component`]: crate::tui::component::Component

pub mod home;
pub mod login;
pub mod overlay;
pub mod splash;
pub mod title_bar;
pub mod tutorial;

pub use home::HomeView;
pub use login::LoginView;
pub use overlay::{MenuOverlay, ProfileOverlay};
pub use splash::SplashView;
pub use title_bar::TitleBar;
pub use tutorial::TutorialView;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Braille spinner glyph for the given animation frame.
pub fn spinner(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner(0), spinner(SPINNER_FRAMES.len()));
        assert_ne!(spinner(0), spinner(1));
    }
}
