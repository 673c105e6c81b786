//! Position, key hints, and the transient play notification.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::ACCENT;

pub struct StatusBarView<'a> {
    position: usize,
    total: usize,
    toast: Option<&'a str>,
}

impl<'a> StatusBarView<'a> {
    /// `position` is zero-based.
    pub fn new(position: usize, total: usize, toast: Option<&'a str>) -> Self {
        Self {
            position,
            total,
            toast,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        let left = match self.toast {
            Some(message) => Line::from(Span::styled(message, Style::default().fg(Color::Green))),
            None => Line::from(format!("Pick {}/{}", self.position + 1, self.total)),
        };
        Paragraph::new(left).render(chunks[0], buf);

        let help_line = Line::from(vec![
            Span::styled("[n]", Style::default().fg(ACCENT)),
            Span::raw("ext "),
            Span::styled("[s]", Style::default().fg(ACCENT)),
            Span::raw("huffle lane "),
            Span::styled("[p]", Style::default().fg(ACCENT)),
            Span::raw("lay "),
            Span::styled("[q]", Style::default().fg(ACCENT)),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
