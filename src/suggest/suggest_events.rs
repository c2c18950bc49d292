use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle a key while the suggestion dropdown is on screen
///
/// Returns true if the key was consumed. Enter with nothing highlighted is
/// left for the send action.
pub fn handle_dropdown_key(app: &mut App, key: KeyEvent) -> bool {
    if !key.modifiers.is_empty() {
        return false;
    }
    // An open dropdown with an empty list still answers to Esc
    if key.code == KeyCode::Esc && app.suggest.is_visible() {
        app.suggest.on_escape();
        return true;
    }
    if !app.suggest.is_shown() {
        return false;
    }

    match key.code {
        KeyCode::Down => app.suggest.highlight_next(),
        KeyCode::Up => app.suggest.highlight_previous(),
        KeyCode::Enter if !app.chat.is_loading() => match app.suggest.accept_highlighted() {
            Some(text) => {
                app.apply_selection(&text);
                true
            }
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
#[path = "suggest_events_tests.rs"]
mod suggest_events_tests;
