//! Mouse event handling
//!
//! Presses are routed by the region under the pointer. Anything that lands
//! outside both the draft editor and the dropdown dismisses the dropdown.

use ratatui::crossterm::event::{MouseEvent, MouseEventKind};

use super::app_state::{App, Focus};
use crate::layout::{Region, region_at};
use crate::suggest::item_at_row;

const WHEEL_LINES: u16 = 3;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(_) => handle_press(app, region, mouse),
        MouseEventKind::ScrollUp if region == Some(Region::TranscriptPane) => {
            app.chat.scroll.scroll_up(WHEEL_LINES);
        }
        MouseEventKind::ScrollDown if region == Some(Region::TranscriptPane) => {
            app.chat.scroll.scroll_down(WHEEL_LINES);
        }
        _ => {}
    }
}

fn handle_press(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Dropdown) => click_dropdown(app, mouse),
        // Clicks that only move the cursor leave a dismissed dropdown closed
        Some(Region::InputField) if app.focus != Focus::InputField => app.focus_input(),
        Some(Region::InputField) => {}
        Some(Region::SearchBar) => {
            app.focus = Focus::Search;
            app.search.unconfirm();
            app.suggest.on_blur_outside();
        }
        Some(Region::TranscriptPane) => app.focus_transcript(),
        Some(Region::HelpLine) | None => app.suggest.on_blur_outside(),
    }
}

fn click_dropdown(app: &mut App, mouse: MouseEvent) {
    let Some(area) = app.layout_regions.dropdown else {
        return;
    };
    // Border clicks land here too and do nothing
    let Some(index) = item_at_row(&app.suggest, area, mouse.row) else {
        return;
    };
    if app.chat.is_loading() {
        return;
    }
    if let Some(text) = app.suggest.click_item(index) {
        app.apply_selection(&text);
        app.focus = Focus::InputField;
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
