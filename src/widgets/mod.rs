//! Shared layout and text helpers for popups and panes

pub mod popup;
pub mod text_width;
