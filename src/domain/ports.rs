use crate::domain::model::CapturedEvent;

/// Observer notified for every event that clears the level filter, after the
/// event has been buffered. Set one per target or store-wide as a default.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &CapturedEvent);
}

impl<F> EventSink for F
where
    F: Fn(&CapturedEvent) + Send + Sync,
{
    fn on_event(&self, event: &CapturedEvent) {
        self(event)
    }
}

/// Sink that ignores everything; the store-wide default until replaced.
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&self, _event: &CapturedEvent) {}
}
