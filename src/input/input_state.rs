use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// Rows the editor grows to before it starts scrolling
pub const MAX_INPUT_ROWS: u16 = 6;

const PLACEHOLDER: &str = "Type a prompt…";

/// The draft prompt editor
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: Self::fresh_textarea(vec![String::new()]),
        }
    }

    fn fresh_textarea(lines: Vec<String>) -> TextArea<'static> {
        let mut textarea = TextArea::new(lines);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea
    }

    /// Current draft: the editor lines joined with `\n`
    pub fn draft(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.trim().is_empty())
    }

    /// Replace the whole draft and put the cursor at its end
    pub fn set_draft(&mut self, text: &str) {
        let lines = text.split('\n').map(str::to_string).collect();
        self.textarea = Self::fresh_textarea(lines);
        self.textarea.move_cursor(CursorMove::Bottom);
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.set_draft("");
    }

    /// Feed a key to the editor; returns true if the text changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    pub fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    /// Height of the input box including borders
    pub fn desired_height(&self) -> u16 {
        let rows = u16::try_from(self.line_count()).unwrap_or(u16::MAX);
        rows.clamp(1, MAX_INPUT_ROWS) + 2
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
