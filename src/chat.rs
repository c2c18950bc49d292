//! Conversation module
//!
//! Holds the active conversation, the selected model and the in-flight
//! completion, and renders the transcript pane.

mod chat_render;
mod chat_state;
mod scroll_state;

pub use chat_render::{render_transcript, wrap_transcript};
pub use chat_state::{ChatState, CompletionOutcome};
pub use scroll_state::ScrollState;
