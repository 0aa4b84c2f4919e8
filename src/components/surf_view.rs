use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{
    AppHeader, Component, HEADER_HEIGHT, LocationPanel, LocationPanelProps, MarinePanel,
    MarinePanelProps, SearchBox, SearchBoxProps, WeatherPanel, WeatherPanelProps,
};
use crate::action::Action;
use crate::state::{AppState, Location};

/// Search card height: borders + description + spacer + input.
const SEARCH_HEIGHT: u16 = 5;

/// Below this width the three panels stack vertically.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Props for SurfView - read-only view of state
pub struct SurfViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: header, search card, dropdown, panels and help bar
#[derive(Default)]
pub struct SurfView {
    search: SearchBox,
}

impl SurfView {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn no_results_message(query: &str) -> String {
    format!("No locations found for \"{query}\". Try a different search term.")
}

fn render_no_results(frame: &mut Frame, area: Rect, query: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            no_results_message(query),
            Style::default().fg(Color::Gray),
        ))
        .centered(),
    ])
    .wrap(Wrap { trim: false })
    .block(block);
    frame.render_widget(message, area);
}

fn render_panels(frame: &mut Frame, area: Rect, state: &AppState, location: &Location) {
    let panels = if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Min(6),
        ])
        .split(area)
    };

    let mut location_panel = LocationPanel;
    location_panel.render(frame, panels[0], LocationPanelProps { location });

    let mut weather_panel = WeatherPanel;
    weather_panel.render(
        frame,
        panels[1],
        WeatherPanelProps {
            weather: &state.weather,
        },
    );

    let mut marine_panel = MarinePanel;
    marine_panel.render(
        frame,
        panels[2],
        MarinePanelProps {
            marine: &state.marine,
        },
    );
}

impl Component<Action> for SurfView {
    type Props<'a> = SurfViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let props = SearchBoxProps {
            state: props.state,
            is_focused: props.is_focused,
        };
        self.search
            .handle_event(event, props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: SurfViewProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Min(1),    // Panels / empty state
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let mut header = AppHeader;
        header.render(frame, chunks[0], ());

        self.search.render(
            frame,
            chunks[1],
            SearchBoxProps {
                state,
                is_focused: props.is_focused,
            },
        );

        let body = chunks[2];
        if let Some(location) = state.selection.as_ref() {
            render_panels(frame, body, state, location);
        } else if state.show_no_results() {
            let message_area = Rect {
                height: body.height.min(5),
                ..body
            };
            render_no_results(frame, message_area, &state.query);
        }

        // Dropdown hangs off the search card, over the body
        let dropdown_area = Rect {
            x: chunks[1].x + 1,
            y: body.y,
            width: chunks[1].width.saturating_sub(2),
            height: SearchBox::dropdown_height(state).min(body.height),
        };
        self.search.render_dropdown(
            frame,
            dropdown_area,
            SearchBoxProps {
                state,
                is_focused: props.is_focused,
            },
        );

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[3],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("type", "search"),
                    StatusBarHint::new("↑↓", "move"),
                    StatusBarHint::new("enter", "select"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
