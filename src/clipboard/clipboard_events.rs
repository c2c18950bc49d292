use crate::app::App;

use super::backend::copy_to_clipboard;

/// Copy the newest assistant message; returns whether anything was copied
pub fn copy_last_reply(app: &mut App) -> bool {
    let Some(reply) = app.chat.last_reply().map(str::to_string) else {
        app.notification.show("No reply to copy yet");
        return false;
    };

    match copy_to_clipboard(&reply, app.settings.clipboard_backend) {
        Ok(()) => {
            app.notification.show("Copied reply!");
            true
        }
        Err(e) => {
            app.notification.show_error(format!("Copy failed: {}", e));
            false
        }
    }
}

#[cfg(test)]
#[path = "clipboard_events_tests.rs"]
mod clipboard_events_tests;
