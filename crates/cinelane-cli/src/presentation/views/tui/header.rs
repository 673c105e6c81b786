//! Title, provider badge and the metadata line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ScreenViewModel;

use super::{ACCENT, MUTED};

pub struct HeaderView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Tonight's pick").borders(Borders::ALL);

        let title_line = Line::from(vec![
            Span::styled(
                self.model.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", self.model.provider_badge),
                Style::default().fg(Color::Black).bg(ACCENT),
            ),
        ]);
        let meta_line = Line::from(Span::styled(
            self.model.meta.as_str(),
            Style::default().fg(MUTED),
        ));

        Paragraph::new(vec![title_line, meta_line])
            .block(block)
            .render(area, buf);
    }
}
