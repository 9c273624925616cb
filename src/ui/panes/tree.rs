//! Expression tree pane

use crate::interpreter::outline::{OutlineKind, OutlineLine};
use crate::ui::panes::utils::{clamp_scroll, inner_height, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn outline_item(line: &OutlineLine) -> ListItem<'_> {
    let label_style = match line.kind {
        OutlineKind::Operator(_) => Style::default()
            .fg(DEFAULT_THEME.operator)
            .add_modifier(Modifier::BOLD),
        OutlineKind::Group => Style::default().fg(DEFAULT_THEME.group),
        OutlineKind::Number => Style::default().fg(DEFAULT_THEME.number),
    };

    ListItem::new(Line::from(vec![
        Span::styled(line.guide.as_str(), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(line.label.as_str(), label_style),
    ]))
}

/// Render the outline of the selected expression
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    outline: &[OutlineLine],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tree ", is_focused);

    if outline.is_empty() {
        let paragraph = Paragraph::new("(no tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = inner_height(area);
    clamp_scroll(scroll_offset, outline.len(), visible_height);

    let items: Vec<ListItem> = outline
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(outline_item)
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
