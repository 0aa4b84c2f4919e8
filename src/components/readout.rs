//! Side-by-side label/value cells shared by the panels

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Which line of a cell carries the value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuePosition {
    Below,
    Above,
}

pub struct Readout<'a> {
    pub label: &'a str,
    pub value: String,
}

impl<'a> Readout<'a> {
    pub fn new(label: &'a str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Render readouts in equal columns, two rows tall.
pub fn render_row(
    frame: &mut Frame,
    area: Rect,
    readouts: &[Readout<'_>],
    position: ValuePosition,
) {
    if readouts.is_empty() {
        return;
    }
    let columns = Layout::horizontal(readouts.iter().map(|_| Constraint::Fill(1))).split(area);

    for (readout, column) in readouts.iter().zip(columns.iter()) {
        let label = Line::from(Span::styled(
            readout.label.to_string(),
            Style::default().fg(Color::Gray),
        ));
        let value = Line::from(Span::styled(
            readout.value.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
        let lines = match position {
            ValuePosition::Below => vec![label, value],
            ValuePosition::Above => vec![value, label],
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *column);
    }
}
