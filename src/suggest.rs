//! Prompt suggestion dropdown
//!
//! The dropdown follows the draft prompt: each draft edit issues a fetch,
//! the newest matching result replaces the list, and the keyboard or mouse
//! picks an entry to overwrite the draft with.

mod suggest_events;
mod suggest_render;
mod suggest_state;

pub use suggest_events::handle_dropdown_key;
pub use suggest_render::{item_at_row, render_dropdown, visible_window};
pub use suggest_state::{FetchOutcome, FetchRequest, SuggestState, SuggestionItem};
