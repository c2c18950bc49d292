//! Help line rendering
//!
//! One line of key hints at the bottom of the screen, depending on focus.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::app::{App, Focus};

pub(crate) fn help_text(app: &App) -> &'static str {
    match app.focus {
        Focus::InputField if app.suggest.is_shown() => {
            " ↑/↓: Choose suggestion | Enter: Use it | Esc: Dismiss | Tab: Transcript"
        }
        Focus::InputField => {
            " Enter: Send | Alt+Enter: Newline | Tab: Transcript | Ctrl+N: New chat | F2: Model | Ctrl+F: Search | Ctrl+S: Export | Ctrl+Y: Copy | F3: Theme | Ctrl+C: Quit"
        }
        Focus::TranscriptPane => {
            " ↑/↓/PgUp/PgDn: Scroll | g/G: Top/Bottom | Tab: Prompt | Ctrl+F: Search | Ctrl+C: Quit"
        }
        Focus::Search => " Enter: Confirm/Next | n/N: Next/Prev | Esc: Close | Tab: Prompt",
    }
}

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(app)).style(Style::default().fg(app.theme.muted));
    frame.render_widget(help, area);
}
