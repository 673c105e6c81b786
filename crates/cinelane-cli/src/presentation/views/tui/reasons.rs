use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

pub struct ReasonsView<'a> {
    reasons: &'a [String],
}

impl<'a> ReasonsView<'a> {
    pub fn new(reasons: &'a [String]) -> Self {
        Self { reasons }
    }
}

impl<'a> Widget for ReasonsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title("Why this pick").borders(Borders::ALL);

        let items: Vec<ListItem> = self
            .reasons
            .iter()
            .map(|reason| ListItem::new(Line::from(vec![Span::raw("• "), Span::raw(reason.as_str())])))
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
