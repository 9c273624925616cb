//! History pane

use crate::session::Entry;
use crate::ui::panes::utils::{clamp_scroll, inner_height, pane_block, scroll_into_view};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Render submitted expressions, oldest first, marking the selected one.
///
/// The window always scrolls far enough to keep the selected entry visible.
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[Entry],
    selected: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" History ", is_focused);

    if entries.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = inner_height(area);
    clamp_scroll(scroll_offset, entries.len(), visible_height);
    if let Some(index) = selected.filter(|&i| i < entries.len()) {
        scroll_into_view(scroll_offset, index, visible_height);
    }

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, entry)| {
            let is_selected = selected == Some(i);
            let marker = if is_selected { "▶ " } else { "  " };
            let result = match &entry.outcome {
                Ok(evaluation) => Span::styled(
                    format!(" = {}", evaluation.value),
                    Style::default().fg(DEFAULT_THEME.success),
                ),
                Err(_) => {
                    Span::styled(" error", Style::default().fg(DEFAULT_THEME.error))
                }
            };
            let mut source_style = Style::default().fg(DEFAULT_THEME.fg);
            if is_selected {
                source_style = source_style.add_modifier(Modifier::BOLD);
            }

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(entry.source.clone(), source_style),
                result,
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
