//! Suggestion dropdown rendering
//!
//! The dropdown is drawn directly above the prompt editor. Each row shows
//! the suggested prompt and its similarity score, right-aligned.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::SuggestState;
use crate::theme::Theme;
use crate::widgets::popup;
use crate::widgets::text_width::{display_width, truncate_to_width};

// Dropdown display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const MAX_POPUP_WIDTH: usize = 72;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 2;
const POPUP_OFFSET_X: u16 = 1;
const MARKER_WIDTH: usize = 2;
const SCORE_WIDTH: usize = 8;

/// Indices of the suggestions that fit in the dropdown
///
/// Scrolls just enough to keep the highlighted entry on screen.
pub fn visible_window(len: usize, highlighted: Option<usize>) -> Range<usize> {
    let visible = len.min(MAX_VISIBLE_SUGGESTIONS);
    let start = match highlighted {
        Some(index) if index >= visible => index + 1 - visible,
        _ => 0,
    };
    start..start + visible
}

/// Suggestion index under screen row `row` of a dropdown drawn at `area`
pub fn item_at_row(state: &SuggestState, area: Rect, row: u16) -> Option<usize> {
    let first_row = area.y + 1;
    let last_row = area.y + area.height.saturating_sub(1);
    if row < first_row || row >= last_row {
        return None;
    }

    let window = visible_window(state.items().len(), state.highlighted());
    let index = window.start + (row - first_row) as usize;
    window.contains(&index).then_some(index)
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the dropdown above `input_area`
///
/// Returns the area drawn, or `None` when nothing was drawn.
pub fn render_dropdown(
    state: &SuggestState,
    theme: &Theme,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if !state.is_shown() {
        return None;
    }

    let items = state.items();
    let window = visible_window(items.len(), state.highlighted());

    let max_text_width = items[window.clone()]
        .iter()
        .map(|item| display_width(&single_line(&item.text)))
        .max()
        .unwrap_or(20);
    let content_width = (MARKER_WIDTH + max_text_width + SCORE_WIDTH).min(MAX_POPUP_WIDTH);
    let popup_width = content_width as u16 + POPUP_PADDING;
    let popup_height = window.len() as u16 + POPUP_BORDER_HEIGHT;

    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height <= POPUP_BORDER_HEIGHT {
        return None;
    }

    let text_width = (popup_area.width.saturating_sub(POPUP_PADDING) as usize)
        .saturating_sub(MARKER_WIDTH + SCORE_WIDTH);

    let list_items: Vec<ListItem> = window
        .clone()
        .map(|index| {
            let item = &items[index];
            let text = truncate_to_width(&single_line(&item.text), text_width);
            let padding = " ".repeat(text_width.saturating_sub(display_width(&text)));
            let score = format!("{:>width$.2}", item.score, width = SCORE_WIDTH);

            let line = if state.highlighted() == Some(index) {
                let selected = Style::default()
                    .fg(theme.selected_fg)
                    .bg(theme.selected_bg);
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}", text, padding),
                        selected.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(score, selected),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", text, padding),
                        Style::default().fg(theme.text).bg(theme.popup_bg),
                    ),
                    Span::styled(score, Style::default().fg(theme.muted).bg(theme.popup_bg)),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.popup_bg)),
    );

    frame.render_widget(list, popup_area);
    Some(popup_area)
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
