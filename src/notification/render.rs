use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{NotificationLevel, NotificationState};
use crate::theme::Theme;
use crate::widgets::popup;
use crate::widgets::text_width::display_width;

const MAX_WIDTH: u16 = 60;
const MARGIN: u16 = 1;

/// Render the current notice in the top-right corner of `area`
pub fn render_notification(
    state: &mut NotificationState,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.level {
        NotificationLevel::Info => theme.accent,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
    };

    let inner_width = MAX_WIDTH - 2;
    let text_width = display_width(&notification.message) as u16;
    let width = text_width.min(inner_width) + 2;
    let lines = text_width.div_ceil(inner_width).max(1);
    let notice_area = popup::top_right(area, width, lines + 2, MARGIN);

    popup::clear_area(frame, notice_area);
    let paragraph = Paragraph::new(notification.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.text).bg(theme.popup_bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, notice_area);
}
