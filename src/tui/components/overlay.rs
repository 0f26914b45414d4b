//! # Profile and Menu Overlays
//!
//! Centered popups drawn over the home screen. Neither one changes state;
//! Esc (or the same key again) closes them.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::home::MENU_SECTIONS;
use crate::core::state::UserProfile;
use crate::tui::component::Component;

const PLACEHOLDER_NAME: &str = "Demo User";
const PLACEHOLDER_EMAIL: &str = "demo@brainwave.com";

fn overlay_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {title} "))
        .title_alignment(Alignment::Left)
        .title_bottom(Line::from(" Esc Done ").centered())
        .padding(Padding::horizontal(1))
}

pub struct ProfileOverlay<'a> {
    pub profile: Option<&'a UserProfile>,
}

impl Component for ProfileOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 40, area);
        frame.render_widget(Clear, overlay);

        let (name, email) = match self.profile {
            Some(profile) => (profile.name(), profile.email()),
            None => (PLACEHOLDER_NAME, PLACEHOLDER_EMAIL),
        };
        let body = Paragraph::new(vec![
            Line::from(Span::styled("◉", Style::default().fg(Color::Blue))),
            Line::from(""),
            Line::from(Span::styled(name, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(email, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(overlay_block("Profile"));
        frame.render_widget(body, overlay);
    }
}

pub struct MenuOverlay;

impl Component for MenuOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 60, area);
        frame.render_widget(Clear, overlay);

        let mut lines = Vec::new();
        for (section, entries) in MENU_SECTIONS {
            lines.push(Line::from(Span::styled(
                *section,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            for entry in *entries {
                lines.push(Line::from(vec![
                    Span::raw(format!("  {entry}")),
                    Span::styled("  ›", Style::default().fg(Color::DarkGray)),
                ]));
            }
            lines.push(Line::from(""));
        }
        frame.render_widget(Paragraph::new(lines).block(overlay_block("Menu")), overlay);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
