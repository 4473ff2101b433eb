// Fluent assertion surface; entry points are `assert_that` for a snapshot and
// `assert_event` for a single event.

pub mod event;
pub mod list;

pub use self::event::{assert_event, EventAssert};
pub use self::list::{assert_that, EventListAssert};
