//! Search bar state: query input, matches and the current match

use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use super::matcher::SearchMatcher;

/// A single match position in the rendered transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Wrapped line number (0-indexed)
    pub line: u32,
    /// Column position (0-indexed, in characters not bytes)
    pub col: u16,
    /// Length of match in characters
    pub len: u16,
}

/// Single-line search input with a reversed block cursor
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// Manages the state of the search feature
pub struct SearchState {
    /// Whether the search bar is on screen
    visible: bool,
    /// When confirmed, n/N navigate matches instead of typing
    confirmed: bool,
    search_textarea: TextArea<'static>,
    /// Matches over the wrapped transcript rows, in reading order
    matches: Vec<Match>,
    /// Index into `matches` of the highlighted match
    current_index: usize,
    /// Query the matches were computed for
    last_query: String,
    /// Set when the current match changed and the transcript should scroll to it
    jump_pending: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    /// Hidden, empty search
    pub fn new() -> Self {
        Self {
            visible: false,
            confirmed: false,
            search_textarea: create_search_textarea(),
            matches: Vec::new(),
            current_index: 0,
            last_query: String::new(),
            jump_pending: false,
        }
    }

    /// Shows the search bar in typing mode, keeping any previous query
    pub fn open(&mut self) {
        self.visible = true;
        self.confirmed = false;
    }

    /// Closes the search bar and clears all state
    pub fn close(&mut self) {
        *self = Self::new();
    }

    /// Whether the search bar is on screen
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether Enter was pressed since the query last changed
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Confirms the search, enabling n/N navigation and scrolling to the current match
    pub fn confirm(&mut self) {
        self.confirmed = true;
        self.jump_pending = !self.matches.is_empty();
    }

    /// Returns to typing mode
    pub fn unconfirm(&mut self) {
        self.confirmed = false;
    }

    /// Returns the current search query
    pub fn query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Mutable access to the input for key and paste handling
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    /// The highlighted match, if any
    pub fn current_match(&self) -> Option<&Match> {
        self.matches.get(self.current_index)
    }

    /// All matches for highlighting
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Index of the highlighted match (0-indexed)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Match counter for the search bar title, "(current/total)"
    pub fn match_count_display(&self) -> String {
        if self.matches.is_empty() {
            "(0/0)".to_string()
        } else {
            format!("({}/{})", self.current_index + 1, self.matches.len())
        }
    }

    /// Moves to the next match, wrapping to the first
    ///
    /// Returns the row to scroll to, or `None` with no matches.
    pub fn next_match(&mut self) -> Option<u32> {
        if self.matches.is_empty() {
            return None;
        }
        self.current_index = (self.current_index + 1) % self.matches.len();
        self.jump_pending = true;
        self.matches.get(self.current_index).map(|m| m.line)
    }

    /// Moves to the previous match, wrapping to the last
    ///
    /// Returns the row to scroll to, or `None` with no matches.
    pub fn prev_match(&mut self) -> Option<u32> {
        if self.matches.is_empty() {
            return None;
        }
        self.current_index = if self.current_index == 0 {
            self.matches.len() - 1
        } else {
            self.current_index - 1
        };
        self.jump_pending = true;
        self.matches.get(self.current_index).map(|m| m.line)
    }

    /// Recompute matches against the lines currently rendered
    ///
    /// Called every frame because wrapping depends on the pane width. The
    /// current index survives unless the query changed or it fell out of range.
    pub fn update_matches<S: AsRef<str>>(&mut self, lines: &[S]) {
        let query = self.query().to_string();
        self.matches = SearchMatcher::find_all(lines, &query);

        if query != self.last_query {
            self.last_query = query;
            self.current_index = 0;
            self.jump_pending = !self.matches.is_empty();
        } else if self.current_index >= self.matches.len() {
            self.current_index = 0;
        }
    }

    /// Line of the current match if a scroll was requested since the last call
    pub fn take_jump(&mut self) -> Option<u32> {
        if !std::mem::take(&mut self.jump_pending) {
            return None;
        }
        self.current_match().map(|m| m.line)
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
