pub mod catalog;
pub mod playback;
pub mod recommendation;
pub mod tui;

pub use catalog::CatalogView;
pub use playback::PlaybackView;
pub use recommendation::RecommendationView;
