//! Token stream pane

use crate::parser::token::Token;
use crate::ui::panes::utils::{clamp_scroll, inner_height, pane_block};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

fn token_style(token: &Token) -> Style {
    match token {
        Token::Number(_) => Style::default().fg(DEFAULT_THEME.number),
        Token::Plus | Token::Star => Style::default().fg(DEFAULT_THEME.operator),
        Token::LParen | Token::RParen => Style::default().fg(DEFAULT_THEME.group),
        Token::Eof => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Render the lexer output, one token per row with its index
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tokens ", is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = inner_height(area);
    clamp_scroll(scroll_offset, tokens.len(), visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(i, token)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3} ", i),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(token.to_string(), token_style(token)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
