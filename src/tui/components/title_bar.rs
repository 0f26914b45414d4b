//! # TitleBar Component
//!
//! Top status bar: app name, the active screen, and the transient status
//! message (sign-in progress, fetch results).
//!
//! Purely presentational. It receives all data as props and has no
//! internal state.
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"BrainWave Analytics | Home | Updated 12:00:03"`
//! 2. **Default**: `"BrainWave Analytics | Home"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Name of the active screen (e.g., "Login")
    pub screen_name: String,
    /// Status message (e.g., "Signing in...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_name: String, status_message: String) -> Self {
        Self {
            screen_name,
            status_message,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("BrainWave Analytics | {}", self.screen_name)
        } else {
            format!(
                "BrainWave Analytics | {} | {}",
                self.screen_name, self.status_message
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::White)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_status() {
        let bar = TitleBar::new("Login".to_string(), String::new());
        assert_eq!(bar.text(), "BrainWave Analytics | Login");
    }

    #[test]
    fn test_with_status() {
        let bar = TitleBar::new("Home".to_string(), "Loading parking data...".to_string());
        assert_eq!(bar.text(), "BrainWave Analytics | Home | Loading parking data...");
    }
}
