mod app_events;
mod app_render;
mod app_state;
mod mouse_events;

pub use app_state::{App, AppSettings, Focus};
