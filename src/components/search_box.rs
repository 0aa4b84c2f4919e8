use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, ScrollbarStyle, SelectList, SelectListBehavior, SelectListProps,
    SelectListStyle, SelectionStyle, TextInput, TextInputProps, TextInputStyle,
    highlight_substring,
};

use super::Component;
use super::location_panel::panel_block;
use super::skeleton;
use crate::action::Action;
use crate::state::{AppState, Location};

pub const SEARCH_PLACEHOLDER: &str = "Enter city name (e.g., New York, London, Tokyo)";
pub const SEARCH_DESCRIPTION: &str = "Search for any city or location worldwide";

/// Placeholder rows shown in the dropdown while a search runs.
pub const LOADING_ROWS: u16 = 3;

/// Search card (description + input) and the results dropdown beneath it
pub struct SearchBox {
    input: TextInput,
    list: SelectList,
    /// Selection the dropdown was last synced to
    synced_selection: u64,
    /// Query text the input last produced itself
    synced_query: String,
}

pub struct SearchBoxProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            list: SelectList::new(),
            synced_selection: 0,
            synced_query: String::new(),
        }
    }
}

fn input_props(value: &str, is_focused: bool) -> TextInputProps<'_, Action> {
    TextInputProps {
        value,
        placeholder: SEARCH_PLACEHOLDER,
        is_focused,
        style: TextInputStyle {
            base: BaseStyle {
                border: None,
                padding: Padding::xy(1, 0),
                bg: Some(Color::Rgb(50, 50, 60)),
                fg: None,
            },
            placeholder_style: None,
            cursor_style: None,
        },
        on_change: Action::SearchQueryChange,
        on_submit: |_| Action::SearchConfirm,
        on_cursor_move: Some(|_| Action::Render),
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catch up with changes made outside the component.
    ///
    /// A selection or a startup query rewrites the text behind the input's
    /// back; the cursor goes to the end so typing appends and Backspace works.
    fn sync(&mut self, state: &AppState) {
        if state.selection_id != self.synced_selection {
            self.list = SelectList::new();
            self.synced_selection = state.selection_id;
        }
        if state.query != self.synced_query {
            let end = EventKind::Key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
            // Only the cursor move matters, not the Render it asks for
            let _ = self.input.handle_event(&end, input_props(&state.query, true));
            self.synced_query = state.query.clone();
        }
    }

    /// Rows needed by the dropdown, borders included (0 when hidden).
    pub fn dropdown_height(state: &AppState) -> u16 {
        if state.search_loading {
            LOADING_ROWS + 2
        } else if state.candidates.is_empty() {
            0
        } else {
            state.candidates.len() as u16 + 2
        }
    }

    fn result_items(results: &[Location], query: &str) -> Vec<Line<'static>> {
        let base = Style::default().fg(Color::Reset);
        let highlight = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        results
            .iter()
            .map(|loc| {
                let mut line = highlight_substring(&loc.name, query.trim(), base, highlight);
                line.spans.push(Span::styled(
                    format!("  {}", loc.region_line()),
                    Style::default().fg(Color::DarkGray),
                ));
                if let Some(code) = loc.feature_code.as_deref() {
                    line.spans.push(Span::styled(
                        format!("  [{code}]"),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                line
            })
            .collect()
    }

    /// Draw the dropdown over whatever is below the card.
    pub fn render_dropdown(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        props: SearchBoxProps<'_>,
    ) {
        let state = props.state;
        if !state.dropdown_visible() || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Rgb(35, 35, 45)));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        if state.search_loading {
            let rows = Layout::vertical((0..LOADING_ROWS).map(|_| Constraint::Length(1))).split(inner);
            for row in rows.iter() {
                skeleton::render_bars(frame, *row, &[row.width.saturating_sub(2)]);
            }
            return;
        }

        let items = Self::result_items(&state.candidates, &state.query);
        let list_props = SelectListProps {
            items: &items,
            count: items.len(),
            selected: state.highlighted,
            is_focused: props.is_focused,
            style: SelectListStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::xy(1, 0),
                    bg: None,
                    fg: None,
                },
                selection: SelectionStyle::default(),
                scrollbar: ScrollbarStyle::default(),
            },
            behavior: SelectListBehavior::default(),
            on_select: Action::SearchHighlight,
            render_item: &|item| item.clone(),
        };
        self.list.render(frame, inner, list_props);
    }
}

impl Component<Action> for SearchBox {
    type Props<'a> = SearchBoxProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        let state = props.state;
        self.sync(state);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Enter => {
                if state.highlighted_candidate().is_some() {
                    return vec![Action::SearchConfirm];
                }
                return Vec::new();
            }
            // Up/down navigate the dropdown (if it has rows)
            KeyCode::Down | KeyCode::Up => {
                if state.candidates.is_empty() {
                    return Vec::new();
                }
                let items = Self::result_items(&state.candidates, &state.query);
                let list_props = SelectListProps {
                    items: &items,
                    count: items.len(),
                    selected: state.highlighted,
                    is_focused: true,
                    style: SelectListStyle {
                        base: BaseStyle {
                            border: None,
                            padding: Padding::xy(1, 0),
                            bg: None,
                            fg: None,
                        },
                        selection: SelectionStyle::default(),
                        scrollbar: ScrollbarStyle::default(),
                    },
                    behavior: SelectListBehavior::default(),
                    on_select: Action::SearchHighlight,
                    render_item: &|item| item.clone(),
                };
                return self
                    .list
                    .handle_event(event, list_props)
                    .into_iter()
                    .collect();
            }
            _ => {}
        }

        // All other keys go to the input
        let actions: Vec<_> = self
            .input
            .handle_event(event, input_props(&state.query, true))
            .into_iter()
            .collect();
        for action in &actions {
            if let Action::SearchQueryChange(value) = action {
                self.synced_query = value.clone();
            }
        }
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.state);

        let block = panel_block("Location Search");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input
        ])
        .split(inner);

        let description = Line::from(Span::styled(
            SEARCH_DESCRIPTION,
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(description), chunks[0]);

        let props_for_input = input_props(&props.state.query, props.is_focused);
        self.input.render(frame, chunks[2], props_for_input);
    }
}
