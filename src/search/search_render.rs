//! Search bar rendering
//!
//! The search bar sits between the transcript and the draft editor.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::App;

pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Render the search bar
pub fn render_bar(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;

    let match_count = app.search.match_count_display();
    let match_count_style = if app.search.matches().is_empty() && !app.search.query().is_empty() {
        Style::default().fg(theme.error)
    } else {
        Style::default().fg(theme.muted)
    };

    let title = if app.search.is_confirmed() {
        " Search (n/N: next/prev, Esc: close) "
    } else {
        " Search: "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_top(
            Line::from(Span::styled(format!(" {} ", match_count), match_count_style))
                .alignment(Alignment::Right),
        )
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.popup_bg));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let search_textarea = app.search.search_textarea_mut();
    search_textarea.set_style(Style::default().fg(theme.text).bg(theme.popup_bg));
    frame.render_widget(&*search_textarea, inner_area);
}

#[cfg(test)]
#[path = "search_render_tests.rs"]
mod search_render_tests;
