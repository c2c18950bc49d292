//! Transcript pane rendering
//!
//! Messages are flattened into display rows first (`wrap_transcript`) so that
//! scrolling and search both work on the same wrapped lines.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::api::{Message, Role};
use crate::app::{App, Focus};
use crate::search::Match;
use crate::theme::Theme;
use crate::widgets::text_width::wrap_to_width;

const BODY_INDENT: &str = "  ";
const THINKING: &str = "thinking…";
const EMPTY_HINT: &str = "No messages yet. Type a prompt and press Enter.";

/// What a display row belongs to, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Label(Role),
    Body(Role),
    Thinking,
    Hint,
    Blank,
}

/// One wrapped display row of the transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRow {
    pub kind: RowKind,
    pub text: String,
}

impl TranscriptRow {
    fn new(kind: RowKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::User => "You",
        Role::Assistant => "Assistant",
        Role::System => "System",
        Role::Other => "Message",
    }
}

fn push_message(rows: &mut Vec<TranscriptRow>, role: Role, content: &str, body_width: usize) {
    if !rows.is_empty() {
        rows.push(TranscriptRow::new(RowKind::Blank, ""));
    }
    rows.push(TranscriptRow::new(RowKind::Label(role), format!("{}:", role_label(role))));
    for line in content.lines() {
        for wrapped in wrap_to_width(line, body_width) {
            rows.push(TranscriptRow::new(
                RowKind::Body(role),
                format!("{}{}", BODY_INDENT, wrapped),
            ));
        }
    }
}

/// Flatten the conversation into rows at most `width` columns wide
///
/// While a completion is in flight the pending prompt is shown followed by a
/// "thinking…" row.
pub fn wrap_transcript(
    messages: &[Message],
    pending_prompt: Option<&str>,
    width: u16,
) -> Vec<TranscriptRow> {
    let body_width = (width as usize).saturating_sub(BODY_INDENT.len()).max(1);
    let mut rows = Vec::new();

    for message in messages {
        push_message(&mut rows, message.role, &message.content, body_width);
    }

    if let Some(prompt) = pending_prompt {
        push_message(&mut rows, Role::User, prompt, body_width);
        rows.push(TranscriptRow::new(RowKind::Blank, ""));
        rows.push(TranscriptRow::new(
            RowKind::Label(Role::Assistant),
            format!("{}:", role_label(Role::Assistant)),
        ));
        rows.push(TranscriptRow::new(
            RowKind::Thinking,
            format!("{}{}", BODY_INDENT, THINKING),
        ));
    }

    if rows.is_empty() {
        rows.push(TranscriptRow::new(RowKind::Hint, EMPTY_HINT));
    }
    rows
}

fn row_style(kind: RowKind, theme: &Theme) -> Style {
    let role_color = |role: Role| match role {
        Role::User => theme.user,
        Role::Assistant => theme.assistant,
        Role::System | Role::Other => theme.muted,
    };
    match kind {
        RowKind::Label(role) => Style::default()
            .fg(role_color(role))
            .add_modifier(Modifier::BOLD),
        RowKind::Body(_) => Style::default().fg(theme.text),
        RowKind::Thinking => Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC),
        RowKind::Hint | RowKind::Blank => Style::default().fg(theme.muted),
    }
}

/// Split `text` into spans, highlighting the given `(col, len, current)` ranges
fn highlight_row(
    text: &str,
    base: Style,
    ranges: &[(usize, usize, bool)],
    theme: &Theme,
) -> Line<'static> {
    if ranges.is_empty() {
        return Line::from(Span::styled(text.to_string(), base));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut pos = 0;

    for &(col, len, current) in ranges {
        let start = col.min(chars.len());
        let end = (col + len).min(chars.len());
        if start > pos {
            spans.push(Span::styled(chars[pos..start].iter().collect::<String>(), base));
        }
        let bg = if current {
            theme.current_match_bg
        } else {
            theme.match_bg
        };
        spans.push(Span::styled(
            chars[start..end].iter().collect::<String>(),
            Style::default().fg(theme.match_fg).bg(bg),
        ));
        pos = end;
    }
    if pos < chars.len() {
        spans.push(Span::styled(chars[pos..].iter().collect::<String>(), base));
    }
    Line::from(spans)
}

fn to_lines(
    rows: &[TranscriptRow],
    matches: &[Match],
    current: Option<usize>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    rows.iter()
        .enumerate()
        .map(|(line_num, row)| {
            let ranges: Vec<(usize, usize, bool)> = matches
                .iter()
                .enumerate()
                .filter(|(_, m)| m.line as usize == line_num)
                .map(|(i, m)| (m.col as usize, m.len as usize, Some(i) == current))
                .collect();
            highlight_row(&row.text, row_style(row.kind, theme), &ranges, theme)
        })
        .collect()
}

/// Render the transcript pane (top)
pub fn render_transcript(app: &mut App, frame: &mut Frame, area: Rect) {
    let theme = app.theme;
    let border_color = if app.focus == Focus::TranscriptPane {
        theme.accent
    } else {
        theme.border
    };

    let title = match app.chat.conversation_id() {
        Some(id) => format!(" Conversation #{} ", id),
        None => " Conversation (local) ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    let rows = wrap_transcript(app.chat.messages(), app.chat.pending_prompt(), inner.width);
    app.chat.scroll.update_bounds(rows.len() as u32, inner.height);

    let (matches, current) = if app.search.is_visible() {
        let texts: Vec<&str> = rows.iter().map(|row| row.text.as_str()).collect();
        app.search.update_matches(&texts);
        if let Some(line) = app.search.take_jump() {
            app.chat.scroll.ensure_line_visible(line);
        }
        let current = (!app.search.matches().is_empty()).then(|| app.search.current_index());
        (app.search.matches().to_vec(), current)
    } else {
        (Vec::new(), None)
    };

    let lines = to_lines(&rows, &matches, current, &theme);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.chat.scroll.offset, 0));

    frame.render_widget(paragraph, area);
    app.layout_regions.transcript = Some(area);
}

#[cfg(test)]
#[path = "chat_render_tests.rs"]
mod chat_render_tests;
