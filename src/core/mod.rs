pub mod capture;
pub mod layer;
pub(crate) mod store;

pub use crate::domain::model::{CapturedEvent, FieldValue};
pub use crate::domain::ports::EventSink;
pub use crate::utils::error::Result;
pub use self::capture::{CaptureHandle, ResetGuard, TargetCapture};
pub use self::layer::CaptureLayer;
