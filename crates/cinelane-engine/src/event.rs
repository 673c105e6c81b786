use serde::Serialize;
use std::fmt;
use std::sync::mpsc::Sender;

/// Notifications a presenter emits to the presentation layer.
///
/// Serializes as `{"event": "playback_requested", "provider": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ViewEvent {
    /// Stand-in for launching playback on the provider
    PlaybackRequested { provider: String },
}

impl fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewEvent::PlaybackRequested { provider } => {
                write!(f, "Prototype action: open {}", provider)
            }
        }
    }
}

/// Receiver side of presenter notifications. Emitting never fails.
pub trait EventSink {
    fn emit(&mut self, event: ViewEvent);
}

impl EventSink for Vec<ViewEvent> {
    fn emit(&mut self, event: ViewEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<ViewEvent> {
    fn emit(&mut self, event: ViewEvent) {
        if let Err(e) = self.send(event) {
            tracing::debug!(event = ?e.0, "view event dropped: receiver closed");
        }
    }
}
