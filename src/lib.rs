//! promptdeck: a terminal chat console with live prompt suggestions

pub mod api;
pub mod app;
pub mod chat;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod notification;
pub mod prefs;
pub mod search;
pub mod suggest;
pub mod theme;
pub mod transcript;
pub mod widgets;
