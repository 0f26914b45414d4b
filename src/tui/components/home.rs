//! # Home Component
//!
//! The dashboard: three stat cards, the occupancy chart for the last 24
//! hours, and the time slider readout.
//!
//! ```text
//! ┌Occupancy┐┌Available┐┌──Total──┐
//! │   66%   ││   24    ││   72    │
//! └─────────┘└─────────┘└─────────┘
//! ┌Occupancy (24h)──────────────────┐
//! │▃▄▅▄▃▂▃▅▆▇▆▅▄▃▄▅▆▅▄▃▂▃▄▅▆▅▄▃▄▅▆▅▄│
//! └─────────────────────────────────┘
//! Time: 12:00   occupancy 31 at 12:13   predicted 36
//! ```

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Sparkline};

use crate::core::home::{HomeStats, format_time_slot, point_for_slot};
use crate::data::FetchStatus;
use crate::tui::component::Component;
use crate::tui::components::spinner;

pub struct HomeView<'a> {
    pub status: &'a FetchStatus,
    pub selected_slot: usize,
    pub spinner_frame: usize,
}

impl HomeView<'_> {
    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let stats = HomeStats::from_lot(self.status.primary_lot());
        let cards = [
            ("Occupancy", format!("{}%", stats.occupancy_percent), Color::LightRed),
            ("Available", stats.available.to_string(), Color::Green),
            ("Total", stats.total.to_string(), Color::Blue),
        ];
        let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

        for ((title, value, color), card_area) in cards.into_iter().zip(areas.iter()) {
            let card = Paragraph::new(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(card, *card_area);
        }
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title("Occupancy (24h)")
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(lot) = self.status.primary_lot() else {
            let placeholder = if self.status.loading {
                format!("{} Loading parking data", spinner(self.spinner_frame))
            } else {
                "No data".to_string()
            };
            let paragraph = Paragraph::new(placeholder)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let values: Vec<u64> = lot.time_series.iter().map(|p| u64::from(p.occupancy)).collect();
        let sparkline = Sparkline::default()
            .block(block)
            .data(&values)
            .max(u64::from(lot.capacity))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(sparkline, area);
    }

    fn slot_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("Time: {}", format_time_slot(self.selected_slot)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if let Some(point) = self
            .status
            .primary_lot()
            .and_then(|lot| point_for_slot(lot, self.selected_slot, &Local))
        {
            spans.push(Span::raw(format!(
                "   occupancy {} at {}",
                point.occupancy,
                point.timestamp.with_timezone(&Local).format("%H:%M")
            )));
            if let Some(predicted) = point.predicted_occupancy {
                spans.push(Span::styled(
                    format!("   predicted {predicted}"),
                    Style::default().fg(Color::Magenta),
                ));
            }
        }
        if self.status.loading && self.status.primary_lot().is_some() {
            spans.push(Span::styled(
                format!("   {} refreshing", spinner(self.spinner_frame)),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

impl Component for HomeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, stats_area, chart_area, slot_area, error_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = match self.status.primary_lot() {
            Some(lot) => format!("{} · {}", lot.name, lot.location.address),
            None => "Parking Lot".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(header, Style::default().fg(Color::Gray))).alignment(Alignment::Center),
            header_area,
        );

        self.render_stats(frame, stats_area);
        self.render_chart(frame, chart_area);
        frame.render_widget(Paragraph::new(self.slot_line()), slot_area);

        if let Some(error) = &self.status.error {
            let error_line = Paragraph::new(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(error_line, error_area);
        }

        let help = Paragraph::new(Span::styled(
            "←/→ time  r refresh  p profile  m menu  q quit",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(help, help_area);
    }
}
