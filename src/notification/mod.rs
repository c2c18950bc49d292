//! Notification module for promptdeck
//!
//! Provides transient on-screen notices. Any component can show one; it
//! disappears on its own after a level-dependent delay.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notification, NotificationLevel, NotificationState};
