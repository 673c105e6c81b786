//! TUI View Components
//!
//! Ratatui widgets over `ScreenViewModel`. Each view borrows the part of
//! the screen it draws and holds no state of its own.

pub mod details;
pub mod header;
pub mod lane;
pub mod reasons;
pub mod status_bar;

pub use details::DetailsView;
pub use header::HeaderView;
pub use lane::LaneView;
pub use reasons::ReasonsView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;

pub(crate) const ACCENT: Color = Color::Yellow;
pub(crate) const MUTED: Color = Color::DarkGray;
