use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::chat::render_transcript;
use crate::help;
use crate::input::render_field;
use crate::notification::render_notification;
use crate::search::{SEARCH_BAR_HEIGHT, render_bar};
use crate::suggest::render_dropdown;

impl App {
    /// Draw one frame and record where each component went
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();
        let area = frame.area();

        let search_height = if self.search.is_visible() {
            SEARCH_BAR_HEIGHT
        } else {
            0
        };
        let [transcript_area, search_area, input_area, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(search_height),
            Constraint::Length(self.input.desired_height()),
            Constraint::Length(1),
        ])
        .areas(area);

        render_transcript(self, frame, transcript_area);

        if self.search.is_visible() {
            render_bar(self, frame, search_area);
            self.layout_regions.search_bar = Some(search_area);
        }

        render_field(self, frame, input_area);
        self.layout_regions.input = Some(input_area);

        help::render_line(self, frame, help_area);
        self.layout_regions.help_line = Some(help_area);

        // Drawn last so it overlays the transcript
        self.layout_regions.dropdown = render_dropdown(&self.suggest, &self.theme, frame, input_area);

        render_notification(&mut self.notification, &self.theme, frame, area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
