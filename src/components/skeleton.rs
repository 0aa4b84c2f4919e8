//! Loading placeholders

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub const SKELETON_CHAR: char = '▒';

fn skeleton_style() -> Style {
    Style::default().fg(Color::Rgb(70, 70, 80))
}

/// A dimmed bar `width` cells wide.
pub fn bar(width: u16) -> Span<'static> {
    Span::styled(
        SKELETON_CHAR.to_string().repeat(usize::from(width)),
        skeleton_style(),
    )
}

/// One centered bar per entry of `widths`, one row each.
pub fn render_bars(frame: &mut Frame, area: Rect, widths: &[u16]) {
    let lines: Vec<Line> = widths
        .iter()
        .map(|width| Line::from(bar((*width).min(area.width))))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
