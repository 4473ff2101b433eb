use crate::assert::event::EventAssert;
use crate::domain::model::CapturedEvent;
use std::sync::Arc;

/// Fluent assertions over a snapshot of captured events.
///
/// ```
/// use tracecap::{assert_that, install, Level};
///
/// let (_guard, capture) = install();
/// tracing::info!(target: "worker", answer = 42, "job finished");
/// assert_that(capture.target("worker").events_at(Level::INFO))
///     .has_size(1)
///     .first()
///     .has_message("job finished")
///     .has_field("answer", 42);
/// ```
pub struct EventListAssert {
    events: Vec<Arc<CapturedEvent>>,
}

pub fn assert_that(events: Vec<Arc<CapturedEvent>>) -> EventListAssert {
    EventListAssert::new(events)
}

impl EventListAssert {
    pub fn new(events: Vec<Arc<CapturedEvent>>) -> Self {
        Self { events }
    }

    pub fn is_empty(self) -> Self {
        if !self.events.is_empty() {
            panic!(
                "Expected no captured events but found {}",
                self.events.len()
            );
        }
        self
    }

    pub fn is_not_empty(self) -> Self {
        if self.events.is_empty() {
            panic!("Expected captured events but found none");
        }
        self
    }

    pub fn has_size(self, expected: usize) -> Self {
        let actual = self.events.len();
        if actual != expected {
            panic!("Event count mismatch; actual {} is not {}", actual, expected);
        }
        self
    }

    /// Narrows to the first event; panics when the snapshot is empty.
    pub fn first(self) -> EventAssert {
        match self.events.first() {
            Some(event) => EventAssert::new(Arc::clone(event)),
            None => panic!("Expected at least one captured event but found none"),
        }
    }

    /// Narrows to the last event; panics when the snapshot is empty.
    pub fn last(self) -> EventAssert {
        match self.events.last() {
            Some(event) => EventAssert::new(Arc::clone(event)),
            None => panic!("Expected at least one captured event but found none"),
        }
    }

    /// Narrows to the event at `index` (0-based).
    pub fn element(self, index: usize) -> EventAssert {
        if self.events.is_empty() {
            panic!("Expected at least one captured event but found none");
        }
        match self.events.get(index) {
            Some(event) => EventAssert::new(Arc::clone(event)),
            None => panic!(
                "Event index {} out of range; only {} events captured",
                index,
                self.events.len()
            ),
        }
    }

    pub fn all_matching(self, predicate: impl Fn(&CapturedEvent) -> bool) -> Self {
        for (index, event) in self.events.iter().enumerate() {
            if !predicate(event) {
                panic!(
                    "Event at index {} didn't pass predicate: {:?}",
                    index, event.message
                );
            }
        }
        self
    }

    /// Hands the snapshot back, e.g. to dump it via `utils::render`.
    pub fn into_events(self) -> Vec<Arc<CapturedEvent>> {
        self.events
    }
}
