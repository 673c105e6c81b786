use cinelane_engine::ViewEvent;
use std::fmt;

use crate::presentation::views::PlaybackView;

#[derive(Debug)]
pub struct PlaybackViewModel {
    pub index: usize,
    pub title: String,
    pub event: ViewEvent,
}

impl fmt::Display for PlaybackViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", PlaybackView::new(self))
    }
}
