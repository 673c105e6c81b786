pub mod builtin;
pub mod catalog;
pub mod error;
pub mod record;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use record::{RecommendationRecord, RelatedItem};
