use cinelane_types::{Catalog, RecommendationRecord};

use crate::event::{EventSink, ViewEvent};
use crate::render::render;
use crate::state::ViewState;
use crate::surface::DisplaySurface;

/// User-triggerable controls, each bound to exactly one presenter callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    NextRecommendation,
    /// Advances the whole recommendation, same as `NextRecommendation`.
    /// The lane is not reshuffled on its own.
    ShuffleLane,
    Play,
}

/// Binds one view's `ViewState` to a display surface.
///
/// A presenter always shows exactly one record: the one at its current
/// index. Construction renders it immediately.
pub struct Presenter<S, E> {
    catalog: Catalog,
    state: ViewState,
    surface: S,
    events: E,
}

impl<S, E> Presenter<S, E>
where
    S: DisplaySurface,
    E: EventSink,
{
    /// Starts on the first record.
    pub fn new(catalog: Catalog, surface: S, events: E) -> Self {
        Self::build(catalog, ViewState::new(), surface, events)
    }

    /// Starts on the record at `index`, or `None` when `catalog` has no
    /// such record.
    pub fn starting_at(catalog: Catalog, index: usize, surface: S, events: E) -> Option<Self> {
        let state = ViewState::starting_at(index, catalog.len())?;
        Some(Self::build(catalog, state, surface, events))
    }

    fn build(catalog: Catalog, state: ViewState, surface: S, events: E) -> Self {
        let mut presenter = Self {
            catalog,
            state,
            surface,
            events,
        };
        presenter.render_current();
        presenter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn current(&self) -> &RecommendationRecord {
        &self.catalog[self.state.index()]
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn into_parts(self) -> (S, E) {
        (self.surface, self.events)
    }

    /// Write `record` into this presenter's surface.
    ///
    /// Does not touch the view state.
    pub fn render(&mut self, record: &RecommendationRecord) {
        render(&mut self.surface, record);
    }

    pub fn advance(&mut self) -> usize {
        let index = self.state.advance(self.catalog.len());
        tracing::debug!(index, title = %self.catalog[index].title, "advanced recommendation");
        self.render_current();
        index
    }

    // TODO: reshuffle only the related lane once that lane has its own data source.
    pub fn shuffle_lane(&mut self) -> usize {
        self.advance()
    }

    /// Report the provider of the record on screen. No state change.
    pub fn play_current(&mut self) {
        let provider = self.current().provider.clone();
        tracing::debug!(index = self.state.index(), %provider, "playback requested");
        self.events.emit(ViewEvent::PlaybackRequested { provider });
    }

    pub fn dispatch(&mut self, control: Control) {
        match control {
            Control::NextRecommendation => {
                self.advance();
            }
            Control::ShuffleLane => {
                self.shuffle_lane();
            }
            Control::Play => self.play_current(),
        }
    }

    fn render_current(&mut self) {
        render(&mut self.surface, &self.catalog[self.state.index()]);
    }
}
