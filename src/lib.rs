pub mod assert;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use assert::{assert_event, assert_that, EventAssert, EventListAssert};
pub use config::CaptureConfig;
pub use crate::core::{CaptureHandle, CaptureLayer, ResetGuard, TargetCapture};
pub use domain::model::{CapturedEvent, FieldValue};
pub use domain::ports::EventSink;
pub use tracing::Level;
pub use utils::error::{CaptureError, Result};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::layer::SubscriberExt;

/// Installs a capturing subscriber as the default for the current thread and
/// returns the guard keeping it installed plus the handle for querying. The
/// usual entry point in tests: capture stops when the guard drops, so
/// parallel tests don't see each other's events.
pub fn install() -> (DefaultGuard, CaptureHandle) {
    install_with(CaptureConfig::default())
}

pub fn install_with(config: CaptureConfig) -> (DefaultGuard, CaptureHandle) {
    let (layer, handle) = CaptureLayer::with_config(config);
    let subscriber = tracing_subscriber::registry().with(layer);
    let guard = tracing::subscriber::set_default(subscriber);
    (guard, handle)
}

/// Installs a capturing subscriber as the process-global default. Fails when
/// another global subscriber was installed first.
pub fn init() -> Result<CaptureHandle> {
    init_with(CaptureConfig::default())
}

pub fn init_with(config: CaptureConfig) -> Result<CaptureHandle> {
    let (layer, handle) = CaptureLayer::with_config(config);
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(handle)
}
