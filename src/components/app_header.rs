use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const APP_TITLE: &str = "SurfApp";
pub const APP_SUBTITLE: &str = "Search for locations and get weather & marine conditions";

/// Rows reserved for the header: FIGlet title + subtitle.
pub const HEADER_HEIGHT: u16 = 7;

/// FIGlet title over a surf-colored gradient, subtitle underneath
pub struct AppHeader;

fn ocean_gradient() -> Fill {
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(70, 160, 255),  // Deep water
        ArtColor::rgb(120, 230, 210), // Shallows
    ))
}

impl Component<Action> for AppHeader {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Title (artbox picks the font that fits)
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(ocean_gradient());
        frame.render_widget(ArtBox::new(&renderer, APP_TITLE), chunks[0]);

        let subtitle = Line::from(vec![Span::styled(
            APP_SUBTITLE,
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}
