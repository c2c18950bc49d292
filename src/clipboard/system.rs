//! System clipboard backend via arboard

use arboard::Clipboard;

use super::backend::{ClipboardError, ClipboardResult};

/// Copy text to the OS clipboard
///
/// Fails with `SystemUnavailable` when no clipboard can be opened, e.g. in
/// headless environments without a display server.
pub fn copy(text: &str) -> ClipboardResult {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;

    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}
