//! Conversions from engine output into command output.

use cinelane_engine::ViewEvent;
use cinelane_types::Catalog;

use crate::presentation::view_models::{
    CatalogEntryViewModel, CatalogViewModel, CommandOutput, PlaybackViewModel,
    RecommendationViewModel, ScreenViewModel,
};

pub fn present_screen(index: usize, total: usize, screen: ScreenViewModel) -> CommandOutput {
    CommandOutput::Screen(RecommendationViewModel {
        index,
        total,
        screen,
    })
}

pub fn present_catalog(catalog: &Catalog) -> CommandOutput {
    let entries = catalog
        .iter()
        .enumerate()
        .map(|(index, record)| CatalogEntryViewModel {
            index,
            title: record.title.clone(),
            meta: record.meta.clone(),
            provider: record.provider.clone(),
            imdb_score: record.imdb_score.clone(),
            critic_score: record.critic_score.clone(),
        })
        .collect();

    CommandOutput::Catalog(CatalogViewModel { entries })
}

pub fn present_playback(index: usize, title: &str, event: ViewEvent) -> CommandOutput {
    CommandOutput::Playback(PlaybackViewModel {
        index,
        title: title.to_string(),
        event,
    })
}
