//! Each assertion's failure path, in the shape the messages promise.

use std::sync::Arc;
use tracecap::{assert_that, install, CapturedEvent, Level};
use tracing::info;

fn captured() -> Vec<Arc<CapturedEvent>> {
    let (guard, capture) = install();
    info!(target: "tracecap_fail", answer = 42, "the message");
    drop(guard);
    capture.target("tracecap_fail").events_at(Level::INFO)
}

#[test]
#[should_panic(expected = "Level mismatch")]
fn wrong_level() {
    assert_that(captured()).first().has_level(Level::WARN);
}

#[test]
#[should_panic(expected = "Message mismatch")]
fn wrong_message() {
    assert_that(captured()).first().has_message("another message");
}

#[test]
#[should_panic(expected = "does not contain")]
fn message_does_not_contain() {
    assert_that(captured()).first().message_contains("absent");
}

#[test]
#[should_panic(expected = "does not match")]
fn message_does_not_match_pattern() {
    assert_that(captured()).first().message_matches(r"^\d+$");
}

#[test]
#[should_panic(expected = "Bad message pattern")]
fn invalid_pattern_is_reported() {
    assert_that(captured()).first().message_matches(r"([unclosed");
}

#[test]
#[should_panic(expected = "Field answer mismatch")]
fn wrong_field_value() {
    assert_that(captured()).first().has_field("answer", 41);
}

#[test]
#[should_panic(expected = "Field missing_field missing")]
fn missing_field() {
    assert_that(captured()).first().has_field("missing_field", 1);
}

#[test]
#[should_panic(expected = "unexpectedly present")]
fn unexpected_field() {
    assert_that(captured()).first().has_no_field("answer");
}

#[test]
#[should_panic(expected = "Field count mismatch")]
fn wrong_field_count() {
    assert_that(captured()).first().has_field_count(3);
}

#[test]
#[should_panic(expected = "didn't pass predicate")]
fn fields_fail_predicate() {
    assert_that(captured()).first().fields_match(|fields| fields.is_empty());
}

#[test]
#[should_panic(expected = "Expected an error value")]
fn no_error_recorded() {
    assert_that(captured()).first().has_error_containing("boom");
}

#[test]
#[should_panic(expected = "Thread name mismatch")]
fn wrong_thread_name() {
    assert_that(captured()).first().has_thread_name("not-this-thread");
}

#[test]
#[should_panic(expected = "Target mismatch")]
fn wrong_target() {
    assert_that(captured()).first().has_target("elsewhere");
}

#[test]
#[should_panic(expected = "Context entry fuzzy missing")]
fn missing_context_entry() {
    assert_that(captured()).first().context_contains("fuzzy", "wuzzy");
}

#[test]
#[should_panic(expected = "Expected no captured events")]
fn not_empty_when_empty_expected() {
    assert_that(captured()).is_empty();
}

#[test]
#[should_panic(expected = "Event count mismatch")]
fn wrong_size() {
    assert_that(captured()).has_size(5);
}

#[test]
#[should_panic(expected = "Expected captured events but found none")]
fn empty_when_events_expected() {
    assert_that(Vec::new()).is_not_empty();
}

#[test]
#[should_panic(expected = "Expected at least one captured event but found none")]
fn first_on_empty_snapshot() {
    assert_that(Vec::new()).first();
}

#[test]
#[should_panic(expected = "Expected at least one captured event but found none")]
fn last_on_empty_snapshot() {
    assert_that(Vec::new()).last();
}

#[test]
#[should_panic(expected = "Expected at least one captured event but found none")]
fn element_on_empty_snapshot() {
    assert_that(Vec::new()).element(42);
}

#[test]
#[should_panic(expected = "out of range")]
fn element_past_the_end() {
    assert_that(captured()).element(42);
}

#[test]
#[should_panic(expected = "didn't pass predicate")]
fn all_matching_names_the_offender() {
    assert_that(captured()).all_matching(|event| event.message.is_empty());
}

#[test]
fn context_does_not_contain_accepts_empty_context() {
    assert_that(captured()).first().context_does_not_contain("anything");
}
