//! Scores, synopsis and the watch call to action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ScreenViewModel;

use super::{ACCENT, MUTED};

pub struct DetailsView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> DetailsView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DetailsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);

        let scores = Line::from(vec![
            Span::styled("IMDb ", Style::default().fg(MUTED)),
            Span::styled(
                self.model.imdb_score.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("Critics ", Style::default().fg(MUTED)),
            Span::styled(
                self.model.critic_score.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        let watch = Line::from(vec![
            Span::styled("▶ Watch on ", Style::default().fg(ACCENT)),
            Span::styled(
                self.model.provider_label.as_str(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]);

        let lines = vec![
            scores,
            Line::raw(""),
            Line::raw(self.model.synopsis.as_str()),
            Line::raw(""),
            watch,
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
