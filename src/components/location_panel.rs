use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use super::readout::{self, Readout, ValuePosition};
use crate::action::Action;
use crate::format;
use crate::state::Location;

pub struct LocationPanel;

pub struct LocationPanelProps<'a> {
    pub location: &'a Location,
}

pub(crate) fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
}

impl Component<Action> for LocationPanel {
    type Props<'a> = LocationPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block("Location Details");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let location = props.location;
        let chunks = Layout::vertical([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Region, country
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Coordinates
            Constraint::Length(2), // Elevation + timezone
        ])
        .split(inner);

        let name = Line::from(Span::styled(
            location.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(name), chunks[0]);

        let region = Line::from(Span::styled(
            location.region_line(),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(region), chunks[1]);

        readout::render_row(
            frame,
            chunks[3],
            &[
                Readout::new("Latitude", format::coordinate(location.latitude)),
                Readout::new("Longitude", format::coordinate(location.longitude)),
            ],
            ValuePosition::Below,
        );

        if let Some(meters) = location.shown_elevation() {
            readout::render_row(
                frame,
                chunks[4],
                &[
                    Readout::new("Elevation", format::elevation(meters)),
                    Readout::new("Timezone", location.timezone_or_utc()),
                ],
                ValuePosition::Below,
            );
        }
    }
}
