use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::Component;
use super::location_panel::panel_block;
use super::readout::{self, Readout, ValuePosition};
use super::skeleton;
use crate::action::Action;
use crate::format;
use crate::state::WeatherSnapshot;

pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub weather: &'a DataResource<WeatherSnapshot>,
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = panel_block("Current Weather");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Temperature
            Constraint::Length(1), // Wind
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // High / low
        ])
        .split(inner);

        // A failed fetch keeps showing placeholders; there is no retry path.
        let Some(weather) = props.weather.data() else {
            skeleton::render_bars(frame, chunks[0], &[8]);
            skeleton::render_bars(frame, chunks[1], &[14]);
            let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .split(chunks[4]);
            for half in halves.iter() {
                skeleton::render_bars(frame, *half, &[half.width, half.width]);
            }
            return;
        };

        let temperature = Line::from(Span::styled(
            format::celsius(weather.temperature),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();
        frame.render_widget(Paragraph::new(temperature), chunks[0]);

        let wind = Line::from(Span::styled(
            format::wind_speed(weather.wind_speed),
            Style::default().fg(Color::DarkGray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(wind), chunks[1]);

        let description = Line::from(Span::styled(
            weather.description.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(description), chunks[2]);

        readout::render_row(
            frame,
            chunks[4],
            &[
                Readout::new("Today's High", format::celsius(weather.today_max)),
                Readout::new("Today's Low", format::celsius(weather.today_min)),
            ],
            ValuePosition::Below,
        );
    }
}
