//! Clipboard access
//!
//! Copies text through the OS clipboard or, where that is unavailable (SSH,
//! headless sessions), through OSC 52 terminal escape sequences.

mod backend;
mod clipboard_events;
mod osc52;
mod system;

pub use backend::{ClipboardError, ClipboardResult, copy_to_clipboard};
pub use clipboard_events::copy_last_reply;
