//! # Presentation Layer
//!
//! MVVM split between the engine and the terminal.
//!
//! ```text
//! [ Handler ] --> [ engine::Presenter ] --(DisplaySurface)--> [ ScreenViewModel ]
//!                                                                   |
//!                         [ presenters ] --> [ CommandOutput ]
//!                                                   |
//!                       [ ConsoleRenderer ] (text views / JSON)   [ TuiRenderer ] (ratatui views)
//! ```
//!
//! ## Rules
//!
//! * `view_models/` hold raw data. Screen and catalog models implement
//!   `Serialize`; `ScreenViewModel` is also the display surface the engine
//!   writes into.
//! * `presenters` pick the `CommandOutput` a one-shot command prints.
//! * `views/` decide layout and styling: `fmt::Display` for the console,
//!   ratatui `Widget` under `views/tui/`.
//! * `renderers/` drive output and own UI state (toast, quit flag). They
//!   route input to the engine and never edit view models themselves.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, TuiRenderer};
pub use view_models::{CommandOutput, ScreenViewModel};
