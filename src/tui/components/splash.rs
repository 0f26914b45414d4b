//! # Splash Component
//!
//! The typed-out title with a block cursor, and the subtitle once the
//! title is complete.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::splash::SPLASH_SUBTITLE;
use crate::tui::component::Component;

pub struct SplashView {
    pub text: String,
    pub show_subtitle: bool,
    pub cursor_visible: bool,
}

impl Component for SplashView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [icon_area, _, title_area, subtitle_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        let icon = Paragraph::new(Span::styled("◉", Style::default().fg(Color::Blue)))
            .alignment(Alignment::Center);
        frame.render_widget(icon, icon_area);

        let mut title = vec![Span::styled(
            self.text.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )];
        if self.cursor_visible {
            title.push(Span::styled("▌", Style::default().fg(Color::Green)));
        }
        frame.render_widget(Paragraph::new(Line::from(title)).alignment(Alignment::Center), title_area);

        if self.show_subtitle {
            let subtitle = Paragraph::new(Span::styled(SPLASH_SUBTITLE, Style::default().fg(Color::Gray)))
                .alignment(Alignment::Center);
            frame.render_widget(subtitle, subtitle_area);
        }
    }
}
