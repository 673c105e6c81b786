pub mod browse;
pub mod list;
pub mod play;
pub mod show;

use anyhow::Result;
use cinelane_engine::{DisplaySurface, EventSink, Presenter};
use cinelane_types::Catalog;

/// Presenter positioned at `index`, or an error naming the valid range.
fn presenter_at<S, E>(catalog: Catalog, index: usize, surface: S, events: E) -> Result<Presenter<S, E>>
where
    S: DisplaySurface,
    E: EventSink,
{
    let len = catalog.len();
    Presenter::starting_at(catalog, index, surface, events).ok_or_else(|| {
        anyhow::anyhow!(
            "Index {} is out of range: the catalog has {} recommendations (valid: 0..={})",
            index,
            len,
            len - 1
        )
    })
}
