//! "More like this" cards laid out side by side.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::LaneCardViewModel;

use super::MUTED;

pub struct LaneView<'a> {
    cards: &'a [LaneCardViewModel],
}

impl<'a> LaneView<'a> {
    pub fn new(cards: &'a [LaneCardViewModel]) -> Self {
        Self { cards }
    }
}

impl<'a> Widget for LaneView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("More like this").borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.cards.is_empty() {
            Paragraph::new(Span::styled("No related titles", Style::default().fg(MUTED)))
                .render(inner, buf);
            return;
        }

        let constraints = vec![Constraint::Ratio(1, self.cards.len() as u32); self.cards.len()];
        let slots = Layout::horizontal(constraints).split(inner);

        for (card, slot) in self.cards.iter().zip(slots.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    card.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(card.subtitle.as_str(), Style::default().fg(MUTED))),
            ];
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::LEFT))
                .wrap(Wrap { trim: true })
                .render(*slot, buf);
        }
    }
}
