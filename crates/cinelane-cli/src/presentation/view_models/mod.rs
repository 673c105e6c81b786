pub mod catalog;
pub mod output;
pub mod playback;
pub mod screen;

pub use catalog::{CatalogEntryViewModel, CatalogViewModel};
pub use output::CommandOutput;
pub use playback::PlaybackViewModel;
pub use screen::{LaneCardViewModel, RecommendationViewModel, ScreenViewModel};
