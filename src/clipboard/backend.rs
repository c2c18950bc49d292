use thiserror::Error;

use crate::config::ClipboardBackend;

use super::{osc52, system};

pub type ClipboardResult = Result<(), ClipboardError>;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No OS clipboard could be opened (headless, SSH without forwarding)
    #[error("system clipboard unavailable")]
    SystemUnavailable,
    #[error("could not write to clipboard")]
    WriteError,
}

/// Put `text` on the clipboard through `backend`
///
/// `Auto` prefers the OS clipboard and falls back to an OSC 52 sequence,
/// which most terminal emulators forward to the local clipboard.
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|e| {
            log::debug!("System clipboard failed ({}), using OSC 52", e);
            osc52::copy(text)
        }),
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod backend_tests;
