use crate::assert::{assert_that, EventListAssert};
use crate::core::store::EventStore;
use crate::domain::model::CapturedEvent;
use crate::domain::ports::EventSink;
use std::fmt;
use std::sync::Arc;
use tracing::Level;

/// Store-wide view shared with a [`crate::CaptureLayer`]. Cheap to clone and
/// send to other threads; every clone sees the same buffers.
#[derive(Clone)]
pub struct CaptureHandle {
    store: Arc<EventStore>,
}

impl CaptureHandle {
    pub(crate) fn new(store: Arc<EventStore>) -> Self {
        Self { store }
    }

    /// View over one target, the unit events are grouped and configured by.
    /// Targets spring into existence lazily; asking for one never fails.
    pub fn target(&self, name: impl Into<String>) -> TargetCapture {
        TargetCapture {
            store: Arc::clone(&self.store),
            name: name.into(),
        }
    }

    /// Events of one level across every target, in capture order.
    pub fn all_events_at(&self, level: Level) -> Vec<Arc<CapturedEvent>> {
        self.store.all_events_at(level)
    }

    pub fn reset_all(&self) {
        self.store.reset_all();
    }

    pub fn default_level(&self) -> Level {
        self.store.default_level()
    }

    /// Level applied to targets without an override of their own.
    pub fn set_default_level(&self, level: Level) {
        self.store.set_default_level(level);
    }

    /// Sink observing events on targets without a sink of their own.
    pub fn set_default_sink(&self, sink: impl EventSink + 'static) {
        self.store.set_default_sink(Arc::new(sink));
    }
}

// The store holds trait objects, so Debug is written by hand with the bits
// that help when a handle shows up in a test failure.
impl fmt::Debug for CaptureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureHandle")
            .field("default_level", &self.store.default_level())
            .finish_non_exhaustive()
    }
}

/// Per-target operations: querying, clearing, level and sink overrides.
#[derive(Clone)]
pub struct TargetCapture {
    store: Arc<EventStore>,
    name: String,
}

impl TargetCapture {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of this target's events at one level, in capture order.
    /// Later captures or clears never mutate a returned snapshot.
    pub fn events_at(&self, level: Level) -> Vec<Arc<CapturedEvent>> {
        self.store.events_at(&self.name, level)
    }

    /// Snapshot of every buffered event for this target, in capture order.
    pub fn all_events(&self) -> Vec<Arc<CapturedEvent>> {
        self.store.all_events(&self.name)
    }

    /// Fluent assertion entry point over the level's current snapshot.
    pub fn assert_at(&self, level: Level) -> EventListAssert {
        assert_that(self.events_at(level))
    }

    pub fn clear_at(&self, level: Level) {
        self.store.clear_at(&self.name, level);
    }

    pub fn reset(&self) {
        self.store.reset(&self.name);
    }

    /// Effective max level: the target's override when set, else the default.
    pub fn level(&self) -> Level {
        self.store.effective_level(&self.name)
    }

    pub fn set_level(&self, level: Level) {
        self.store.set_level_override(&self.name, Some(level));
    }

    /// Drops the override so the store default applies again.
    pub fn clear_level(&self) {
        self.store.set_level_override(&self.name, None);
    }

    pub fn set_sink(&self, sink: impl EventSink + 'static) {
        self.store.set_sink_override(&self.name, Some(Arc::new(sink)));
    }

    pub fn clear_sink(&self) {
        self.store.set_sink_override(&self.name, None);
    }

    /// Guard that, when dropped, restores the level override and sink this
    /// target had at guard creation and clears its buffered events. Runs on
    /// panic too, so a failing test body doesn't leak state into the next.
    pub fn reset_on_drop(&self) -> ResetGuard {
        ResetGuard {
            store: Arc::clone(&self.store),
            target: self.name.clone(),
            level: self.store.level_override(&self.name),
            sink: self.store.sink_override(&self.name),
        }
    }
}

impl fmt::Debug for TargetCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetCapture")
            .field("target", &self.name)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

pub struct ResetGuard {
    store: Arc<EventStore>,
    target: String,
    level: Option<Level>,
    sink: Option<Arc<dyn EventSink>>,
}

impl Drop for ResetGuard {
    fn drop(&mut self) {
        self.store.set_level_override(&self.target, self.level);
        self.store.set_sink_override(&self.target, self.sink.take());
        self.store.reset(&self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaptureConfig;

    #[test]
    fn handles_format_for_test_diagnostics() {
        let store = Arc::new(EventStore::new(&CaptureConfig::default()));
        let handle = CaptureHandle::new(Arc::clone(&store));
        let rendered = format!("{:?}", handle);
        assert!(rendered.contains("CaptureHandle"));
        assert!(rendered.contains("INFO"));

        let target = handle.target("worker");
        let rendered = format!("{:?}", target);
        assert!(rendered.contains("worker"));
        assert!(rendered.contains("INFO"));
    }
}
