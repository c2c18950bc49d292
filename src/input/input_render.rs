//! Input field rendering
//!
//! Draws the draft editor with a title carrying the selected model and the
//! request state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::{App, Focus};

/// Render the draft editor (bottom)
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;
    let focused = app.focus == Focus::InputField;
    let loading = app.chat.is_loading();

    // Accent border when focused, muted otherwise
    let border_color = if focused { theme.accent } else { theme.border };

    let mut title_spans = vec![
        Span::raw(" Prompt ["),
        Span::styled(
            app.chat.model().to_string(),
            Style::default().fg(theme.accent),
        ),
        Span::raw("] "),
    ];
    if loading {
        title_spans.push(Span::styled(
            "waiting for reply… ",
            Style::default().fg(theme.warning),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(border_color));

    let cursor_style = if focused && !loading {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let textarea = &mut app.input.textarea;
    textarea.set_block(block);
    textarea.set_style(Style::default().fg(theme.text));
    textarea.set_placeholder_style(Style::default().fg(theme.muted));
    textarea.set_cursor_style(cursor_style);

    frame.render_widget(&*textarea, area);
}
