use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle a key while the search bar has focus
///
/// Returns false if the search bar is closed and the key was not consumed.
pub fn handle_search_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.search.is_visible() {
        return false;
    }

    match key.code {
        KeyCode::Esc => {
            app.search.close();
            app.focus_input();
        }
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.search.prev_match();
        }
        KeyCode::Enter => {
            if app.search.is_confirmed() {
                app.search.next_match();
            } else {
                app.search.confirm();
            }
        }
        KeyCode::Char('n') if app.search.is_confirmed() => {
            app.search.next_match();
        }
        KeyCode::Char('N') if app.search.is_confirmed() => {
            app.search.prev_match();
        }
        _ => {
            app.search.unconfirm();
            app.search.search_textarea_mut().input(key);
        }
    }
    true
}
