//! # Login Component
//!
//! Three sign-in buttons. The focused one is highlighted; all of them are
//! greyed out while a sign-in is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::login::SignInMethod;
use crate::tui::component::Component;
use crate::tui::components::spinner;

const FOOTER: &str = "By continuing, you agree to our Terms of Service and Privacy Policy";

pub struct LoginView {
    pub focused: SignInMethod,
    pub pending: Option<SignInMethod>,
    pub spinner_frame: usize,
}

impl LoginView {
    fn button_style(&self, method: SignInMethod) -> Style {
        if self.pending.is_some() {
            Style::default().fg(Color::DarkGray)
        } else if method == self.focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }
}

impl Component for LoginView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button_count = SignInMethod::ALL.len() as u16;
        let [brand_area, _, buttons_area, _, status_area, footer_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(button_count),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .areas(area);

        let brand = Paragraph::new(vec![
            Line::from(Span::styled("◉", Style::default().fg(Color::Blue))),
            Line::from(Span::styled(
                "BrainWave Analytics",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(brand, brand_area);

        let buttons: Vec<Line> = SignInMethod::ALL
            .iter()
            .map(|&method| {
                let marker = if method == self.focused && self.pending.is_none() { "› " } else { "  " };
                Line::from(Span::styled(
                    format!("{marker}{:<24}", method.label()),
                    self.button_style(method),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), buttons_area);

        if let Some(method) = self.pending {
            let status = Paragraph::new(Span::styled(
                format!("{} Signing in ({})", spinner(self.spinner_frame), method.label()),
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(status, status_area);
        }

        let footer = Paragraph::new(Span::styled(FOOTER, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(footer, footer_area);
    }
}
