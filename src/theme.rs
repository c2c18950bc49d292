//! Color palettes
//!
//! Two fixed palettes, selected by [`ThemeKind`]. Every render function takes
//! a `&Theme` instead of hardcoding colors.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Which palette is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Dark => write!(f, "dark"),
            ThemeKind::Light => write!(f, "light"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub kind: ThemeKind,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub user: Color,
    pub assistant: Color,
    pub error: Color,
    pub warning: Color,
    pub popup_bg: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub match_fg: Color,
    pub match_bg: Color,
    pub current_match_bg: Color,
}

impl Theme {
    pub fn new(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self {
                kind,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                user: Color::Green,
                assistant: Color::Cyan,
                error: Color::Red,
                warning: Color::Yellow,
                popup_bg: Color::Black,
                selected_fg: Color::Black,
                selected_bg: Color::Cyan,
                match_fg: Color::Black,
                match_bg: Color::Yellow,
                current_match_bg: Color::LightRed,
            },
            ThemeKind::Light => Self {
                kind,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                user: Color::Magenta,
                assistant: Color::Blue,
                error: Color::Red,
                warning: Color::Rgb(176, 96, 0),
                popup_bg: Color::White,
                selected_fg: Color::White,
                selected_bg: Color::Blue,
                match_fg: Color::Black,
                match_bg: Color::LightYellow,
                current_match_bg: Color::LightRed,
            },
        }
    }

    pub fn toggled(&self) -> Self {
        Self::new(self.kind.toggled())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeKind::default())
    }
}
