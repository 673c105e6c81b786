//! Testing infrastructure for cinelane.
//!
//! - `RecordingSurface`: fake display surface that records every write
//! - `assertions`: checks that a surface mirrors a record
//! - `fixtures`: synthetic records and catalogs
//! - `TestWorld`: isolated data directory for CLI integration tests

pub mod assertions;
pub mod fixtures;
pub mod surface;
pub mod world;

pub use surface::{RecordingSurface, SurfaceOp};
pub use world::TestWorld;
