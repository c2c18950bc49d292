use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rectangle directly above `anchor`, clamped to the space available
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_height = height.min(anchor.y);
    let popup_y = anchor.y.saturating_sub(popup_height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: popup_height,
    }
}

/// Rectangle in the top-right corner of `area`, inset by `margin`
pub fn top_right(area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(margin * 2));
    let popup_height = height.min(area.height.saturating_sub(margin));

    Rect {
        x: area.x + area.width.saturating_sub(popup_width + margin),
        y: area.y + margin,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
