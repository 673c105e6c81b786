use super::{CatalogViewModel, PlaybackViewModel, RecommendationViewModel};

/// What a one-shot command prints.
#[derive(Debug)]
pub enum CommandOutput {
    /// `show`: one rendered recommendation screen
    Screen(RecommendationViewModel),
    /// `list`: every pick in catalog order
    Catalog(CatalogViewModel),
    /// `play`: the event the presenter emitted
    Playback(PlaybackViewModel),
}
