//! Result pane: prefix form and value, or the error that stopped the pipeline

use crate::session::Entry;
use crate::ui::panes::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the outcome of `entry`, or a hint when nothing was submitted yet.
pub fn render_result_pane(frame: &mut Frame, area: Rect, entry: Option<&Entry>) {
    let block = pane_block(" Result ", false);
    let label = Style::default().fg(DEFAULT_THEME.comment);

    let lines = match entry {
        None => vec![Line::from(Span::styled("(nothing evaluated yet)", label))],
        Some(entry) => match &entry.outcome {
            Ok(evaluation) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("prefix ", label),
                        Span::styled(
                            evaluation.prefix.clone(),
                            Style::default().fg(DEFAULT_THEME.fg),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("value  ", label),
                        Span::styled(
                            evaluation.value.to_string(),
                            Style::default()
                                .fg(DEFAULT_THEME.success)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ]),
                ];
                if let Some(overflow) = &evaluation.overflow {
                    lines.push(Line::from(Span::styled(
                        format!("wrapped: {}", overflow),
                        Style::default().fg(DEFAULT_THEME.secondary),
                    )));
                }
                lines
            }
            Err(err) => vec![Line::from(Span::styled(
                err.to_string(),
                Style::default().fg(DEFAULT_THEME.error),
            ))],
        },
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
