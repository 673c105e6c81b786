use std::fmt;

use crate::presentation::view_models::PlaybackViewModel;

pub struct PlaybackView<'a> {
    data: &'a PlaybackViewModel,
}

impl<'a> PlaybackView<'a> {
    pub fn new(data: &'a PlaybackViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for PlaybackView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.event)?;
        writeln!(f, "  {} (pick {})", self.data.title, self.data.index + 1)
    }
}
