//! # cinelane-engine
//!
//! The render/advance cycle of the recommendation screen.
//!
//! ```text
//! [ Control ] --> [ Presenter ] --(render)--> [ DisplaySurface ]
//!                  (ViewState)  --(emit)----> [ EventSink ]
//! ```
//!
//! The presenter owns its `ViewState` and never reaches for ambient state,
//! so any number of independent views can exist side by side. Where the
//! content ends up (a ratatui screen, a JSON document, a test fake) is
//! decided by the `DisplaySurface` it was given.

pub mod event;
pub mod presenter;
pub mod render;
pub mod state;
pub mod surface;

pub use event::{EventSink, ViewEvent};
pub use presenter::{Control, Presenter};
pub use render::render;
pub use state::ViewState;
pub use surface::{DisplaySurface, ListRegion, Region};
