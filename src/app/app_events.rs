use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{App, Focus};
use super::mouse_events;
use crate::clipboard;
use crate::search;
use crate::suggest;

/// How long to wait for input before polling the API worker again
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Wait briefly for one terminal event and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_INTERVAL)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => mouse_events::handle_mouse_event(self, mouse),
            Event::Paste(text) => self.handle_paste(&text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_key(key),
            Focus::TranscriptPane => self.handle_transcript_key(key),
            Focus::Search => {
                search::handle_search_key(self, key);
            }
        }
    }

    /// Keys that work regardless of focus; returns true if handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.start_conversation(),
            KeyCode::Char('f') if ctrl => self.open_search(),
            KeyCode::Char('s') if ctrl => self.export_transcript(),
            KeyCode::Char('y') if ctrl => {
                clipboard::copy_last_reply(self);
            }
            KeyCode::F(2) => self.cycle_model(),
            KeyCode::F(3) => self.toggle_theme(),
            KeyCode::Tab if key.modifiers.is_empty() => match self.focus {
                Focus::InputField => self.focus_transcript(),
                Focus::TranscriptPane | Focus::Search => self.focus_input(),
            },
            _ => return false,
        }
        true
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if suggest::handle_dropdown_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                if !self.chat.is_loading() {
                    self.input.insert_newline();
                    self.refresh_suggestions();
                }
            }
            KeyCode::Enter => self.send_prompt(),
            KeyCode::PageUp => self.chat.scroll.page_up(),
            KeyCode::PageDown => self.chat.scroll.page_down(),
            _ => {
                // Read-only while a completion is in flight
                if self.chat.is_loading() {
                    return;
                }
                if self.input.handle_key(key) {
                    self.refresh_suggestions();
                }
            }
        }
    }

    fn handle_transcript_key(&mut self, key: KeyEvent) {
        let scroll = &mut self.chat.scroll;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => scroll.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => scroll.scroll_down(1),
            KeyCode::PageUp => scroll.page_up(),
            KeyCode::PageDown => scroll.page_down(),
            KeyCode::Home | KeyCode::Char('g') => scroll.jump_to_top(),
            KeyCode::End | KeyCode::Char('G') => scroll.jump_to_bottom(),
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: &str) {
        match self.focus {
            Focus::InputField if !self.chat.is_loading() => {
                self.input.textarea.insert_str(text);
                self.refresh_suggestions();
            }
            Focus::Search => {
                self.search.search_textarea_mut().insert_str(text);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
