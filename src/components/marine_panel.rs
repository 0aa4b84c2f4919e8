use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use tui_dispatch::DataResource;

use super::Component;
use super::location_panel::panel_block;
use super::readout::{self, Readout, ValuePosition};
use super::skeleton;
use crate::action::Action;
use crate::format;
use crate::state::{MarineConditions, MarineSnapshot};

pub const MARINE_UNAVAILABLE: &str = "Marine data not available for this location.";
pub const MARINE_UNAVAILABLE_HINT: &str =
    "This location may be inland or marine conditions are not monitored here.";

pub struct MarinePanel;

pub struct MarinePanelProps<'a> {
    pub marine: &'a DataResource<MarineSnapshot>,
}

impl Component<Action> for MarinePanel {
    type Props<'a> = MarinePanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block("Marine Conditions");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match props.marine.data() {
            Some(MarineSnapshot::Ready(conditions)) => render_ready(frame, inner, conditions),
            Some(MarineSnapshot::Unavailable) => render_unavailable(frame, inner),
            None => render_placeholder(frame, inner),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, conditions: &MarineConditions) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Readings
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Observation time
    ])
    .split(area);

    readout::render_row(
        frame,
        chunks[0],
        &[
            Readout::new("Wave Height", format::wave_height(conditions.wave_height)),
            Readout::new(
                "Sea Temperature",
                format::sea_temperature(conditions.sea_surface_temperature),
            ),
        ],
        ValuePosition::Above,
    );

    if let Some(observed_at) = &conditions.observed_at {
        let updated = Line::from(Span::styled(
            format!("Updated: {}", format::time_of_day(observed_at)),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(updated), chunks[2]);
    }
}

fn render_unavailable(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("≈≈≈", Style::default().fg(Color::Rgb(60, 80, 100)))).centered(),
        Line::from(Span::styled(
            MARINE_UNAVAILABLE,
            Style::default().fg(Color::Gray),
        ))
        .centered(),
        Line::from(Span::styled(
            MARINE_UNAVAILABLE_HINT,
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Readings
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Observation time
    ])
    .split(area);

    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(chunks[0]);
    skeleton::render_bars(frame, halves[0], &[6, 8]);
    skeleton::render_bars(frame, halves[1], &[6, 10]);
    skeleton::render_bars(frame, chunks[2], &[16]);
}
