//! # Tutorial Component
//!
//! One onboarding page, a page indicator, and the Back / Next buttons.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::tutorial::TutorialState;
use crate::tui::component::Component;

pub struct TutorialView<'a> {
    pub tutorial: &'a TutorialState,
}

impl TutorialView<'_> {
    fn indicator(&self) -> Line<'static> {
        let dots: Vec<Span> = (0..self.tutorial.page_count())
            .map(|i| {
                if i == self.tutorial.page() {
                    Span::styled("● ", Style::default().fg(Color::White))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        Line::from(dots)
    }

    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        if self.tutorial.can_go_back() {
            spans.push(Span::styled("[← Back]", Style::default().fg(Color::Gray)));
            spans.push(Span::raw("    "));
        }
        spans.push(Span::styled(
            format!("[{} →]", self.tutorial.primary_label()),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ));
        Line::from(spans)
    }
}

impl Component for TutorialView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(page) = self.tutorial.current() else {
            return;
        };

        let [title_area, subtitle_area, _, body_area, _, indicator_area, buttons_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .flex(Flex::Center)
            .areas(area);

        let title = Paragraph::new(Span::styled(
            page.title,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let subtitle = Paragraph::new(Span::styled(page.subtitle, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center);
        frame.render_widget(subtitle, subtitle_area);

        let body = Paragraph::new(page.description)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);

        frame.render_widget(Paragraph::new(self.indicator()).alignment(Alignment::Center), indicator_area);
        frame.render_widget(Paragraph::new(self.buttons()).alignment(Alignment::Center), buttons_area);
    }
}
