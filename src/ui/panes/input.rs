//! Expression input pane

use crate::ui::panes::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Horizontal scroll and cursor column (both in terminal cells) that keep the
/// cursor inside a field `width` cells wide.
///
/// `cursor` is a char index into `input`; the column is the display width of
/// the text before it, so wide characters count as two cells.
fn cursor_layout(input: &str, cursor: usize, width: u16) -> (u16, u16) {
    let width = usize::from(width.max(1));
    let column: usize = input
        .chars()
        .take(cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    let h_scroll = column.saturating_sub(width - 1);
    let visible_column = column - h_scroll;

    (
        u16::try_from(h_scroll).unwrap_or(u16::MAX),
        u16::try_from(visible_column).unwrap_or(u16::MAX),
    )
}

/// Render the input line and place the terminal cursor at `cursor` (a char index).
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    cursor: usize,
    is_focused: bool,
) {
    let block = pane_block(" Expression ", is_focused);

    let line = if input.is_empty() {
        Line::from(Span::styled(
            "type an expression, e.g. 1 + (2+3) * 4",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        Line::from(Span::styled(
            input.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ))
    };

    // Keep the cursor visible on narrow terminals by scrolling horizontally
    let (h_scroll, column) = cursor_layout(input, cursor, area.width.saturating_sub(2));

    let paragraph = Paragraph::new(line).block(block).scroll((0, h_scroll));
    frame.render_widget(paragraph, area);

    if is_focused {
        let x = area.x.saturating_add(1).saturating_add(column);
        frame.set_cursor_position((x, area.y + 1));
    }
}
