//! Helpers shared by the pane renderers

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border color
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Number of rows available inside a bordered pane, at least 1
pub(crate) fn inner_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp `scroll_offset` so the visible window never runs past the content.
pub(crate) fn clamp_scroll(
    scroll_offset: &mut usize,
    total_items: usize,
    visible_height: usize,
) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}

/// Adjust `scroll_offset` as little as possible so row `target` is visible.
pub(crate) fn scroll_into_view(
    scroll_offset: &mut usize,
    target: usize,
    visible_height: usize,
) {
    if target < *scroll_offset {
        *scroll_offset = target;
    } else if target >= *scroll_offset + visible_height {
        *scroll_offset = target + 1 - visible_height;
    }
}
