use ratatui::layout::Rect;

/// Screen regions captured during the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub transcript: Option<Rect>,
    pub input: Option<Rect>,
    /// Only set while the suggestion dropdown is drawn
    pub dropdown: Option<Rect>,
    pub search_bar: Option<Rect>,
    pub help_line: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UI component found under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Dropdown,
    InputField,
    TranscriptPane,
    SearchBar,
    HelpLine,
}
