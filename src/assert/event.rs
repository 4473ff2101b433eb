use crate::domain::model::{CapturedEvent, FieldValue};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::Level;

/// Fluent assertions over a single captured event. Every check panics with an
/// actual-vs-expected message and otherwise returns `self` for chaining.
pub struct EventAssert {
    event: Arc<CapturedEvent>,
}

pub fn assert_event(event: Arc<CapturedEvent>) -> EventAssert {
    EventAssert::new(event)
}

impl EventAssert {
    pub fn new(event: Arc<CapturedEvent>) -> Self {
        Self { event }
    }

    /// The underlying event, for checks this API doesn't cover.
    pub fn event(&self) -> &CapturedEvent {
        &self.event
    }

    pub fn has_level(self, level: Level) -> Self {
        if self.event.level != level {
            panic!(
                "Level mismatch; actual {} is not {}",
                self.event.level, level
            );
        }
        self
    }

    pub fn has_target(self, target: &str) -> Self {
        if self.event.target != target {
            panic!(
                "Target mismatch; actual {} is not {}",
                self.event.target, target
            );
        }
        self
    }

    pub fn has_message(self, message: &str) -> Self {
        if self.event.message != message {
            panic!(
                "Message mismatch; actual {:?} is not {:?}",
                self.event.message, message
            );
        }
        self
    }

    pub fn message_contains(self, needle: &str) -> Self {
        if !self.event.message.contains(needle) {
            panic!(
                "Message mismatch; actual {:?} does not contain {:?}",
                self.event.message, needle
            );
        }
        self
    }

    pub fn message_matches(self, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("Bad message pattern {:?}: {}", pattern, e));
        if !regex.is_match(&self.event.message) {
            panic!(
                "Message mismatch; actual {:?} does not match {:?}",
                self.event.message, pattern
            );
        }
        self
    }

    pub fn has_field(self, name: &str, expected: impl Into<FieldValue>) -> Self {
        let expected = expected.into();
        match self.event.fields.get(name) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "Field {} mismatch; actual {} is not {}",
                name, actual, expected
            ),
            None => panic!(
                "Field {} missing; recorded fields: {:?}",
                name,
                self.event.fields.keys().collect::<Vec<_>>()
            ),
        }
        self
    }

    pub fn has_no_field(self, name: &str) -> Self {
        if let Some(actual) = self.event.fields.get(name) {
            panic!("Field {} unexpectedly present with value {}", name, actual);
        }
        self
    }

    pub fn has_field_count(self, expected: usize) -> Self {
        let actual = self.event.fields.len();
        if actual != expected {
            panic!("Field count mismatch; actual {} is not {}", actual, expected);
        }
        self
    }

    pub fn fields_match(self, predicate: impl FnOnce(&BTreeMap<String, FieldValue>) -> bool) -> Self {
        if !predicate(&self.event.fields) {
            panic!(
                "Fields mismatch; {:?} didn't pass predicate",
                self.event.fields
            );
        }
        self
    }

    pub fn has_error_containing(self, needle: &str) -> Self {
        match &self.event.error {
            Some(error) if error.contains(needle) => {}
            Some(error) => panic!(
                "Error mismatch; actual {:?} does not contain {:?}",
                error, needle
            ),
            None => panic!("Expected an error value but none was recorded"),
        }
        self
    }

    pub fn has_no_error(self) -> Self {
        if let Some(error) = &self.event.error {
            panic!("Unexpected error value: {:?}", error);
        }
        self
    }

    pub fn has_thread_name(self, name: &str) -> Self {
        if self.event.thread_name != name {
            panic!(
                "Thread name mismatch; actual {} is not {}",
                self.event.thread_name, name
            );
        }
        self
    }

    pub fn context_contains(self, key: &str, value: &str) -> Self {
        match self.event.context.get(key) {
            Some(actual) if actual == value => {}
            Some(actual) => panic!(
                "Context entry {} ({}) doesn't match {}",
                key, actual, value
            ),
            None => panic!(
                "Context entry {} missing; context: {:?}",
                key, self.event.context
            ),
        }
        self
    }

    pub fn context_value_matches(self, key: &str, predicate: impl FnOnce(&str) -> bool) -> Self {
        match self.event.context.get(key) {
            Some(actual) if predicate(actual) => {}
            Some(actual) => panic!("Context entry {} ({}) didn't pass predicate", key, actual),
            None => panic!(
                "Context entry {} missing; context: {:?}",
                key, self.event.context
            ),
        }
        self
    }

    pub fn context_does_not_contain(self, key: &str) -> Self {
        if self.event.context.contains_key(key) {
            panic!("Context contains entry {}", key);
        }
        self
    }

    pub fn context_matches(self, predicate: impl FnOnce(&BTreeMap<String, String>) -> bool) -> Self {
        if !predicate(&self.event.context) {
            panic!(
                "Context mismatch; {:?} didn't pass predicate",
                self.event.context
            );
        }
        self
    }

    pub fn has_source_file(self, file: &str) -> Self {
        match self.event.file.as_deref() {
            Some(actual) if actual == file => {}
            Some(actual) => panic!("Source file mismatch; actual {} is not {}", actual, file),
            None => panic!("No source file recorded for the event"),
        }
        self
    }
}
