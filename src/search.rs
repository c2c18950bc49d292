//! Search module
//!
//! Client-side search over the rendered transcript. Every case-insensitive
//! occurrence is highlighted; the user can step through matches.

mod matcher;
mod search_events;
mod search_render;
mod search_state;

pub use search_events::handle_search_key;
pub use search_render::{SEARCH_BAR_HEIGHT, render_bar};
pub use search_state::{Match, SearchState};
