use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use tracing::Level;

/// One log event as observed by the capture layer. Immutable once built;
/// everything a test might want to assert on is copied out of the callsite.
#[derive(Debug, Clone, Serialize)]
pub struct CapturedEvent {
    /// Process-wide sequence number, strictly increasing in capture order.
    pub seq: u64,
    #[serde(serialize_with = "serialize_level")]
    pub level: Level,
    pub target: String,
    /// The formatted message text (empty when the event carried no message).
    pub message: String,
    /// Structured fields recorded on the event, minus `message` and error values.
    pub fields: BTreeMap<String, FieldValue>,
    /// Key/values contributed by the spans in scope at the callsite,
    /// outermost first; inner spans win on key collision.
    pub context: BTreeMap<String, String>,
    /// Rendered text of an `Error`-typed field value, when one was recorded.
    pub error: Option<String>,
    pub thread_name: String,
    pub timestamp: DateTime<Utc>,
    pub module_path: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

fn serialize_level<S: Serializer>(level: &Level, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(level.as_str())
}

/// A structured field value as `tracing` hands it to a visitor. Values the
/// macros record through `Debug` keep their rendered form in `Debug`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    Debug(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) | FieldValue::Debug(s) => Some(s),
            _ => None,
        }
    }
}

// The macros record `42` as i64 but `42usize` as u64; equality bridges the
// signed/unsigned split so assertions don't depend on the callsite's types.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        use FieldValue::*;
        match (self, other) {
            (Bool(a), Bool(b)) => a == b,
            (I64(a), I64(b)) => a == b,
            (U64(a), U64(b)) => a == b,
            (F64(a), F64(b)) => a == b,
            (I64(a), U64(b)) | (U64(b), I64(a)) => u64::try_from(*a).map_or(false, |a| a == *b),
            (Str(a), Str(b)) | (Debug(a), Debug(b)) | (Str(a), Debug(b)) | (Debug(a), Str(b)) => {
                a == b
            }
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "{}", v),
            FieldValue::I64(v) => write!(f, "{}", v),
            FieldValue::U64(v) => write!(f, "{}", v),
            FieldValue::F64(v) => write!(f, "{}", v),
            FieldValue::Str(v) | FieldValue::Debug(v) => f.write_str(v),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::I64(v as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::I64(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::U64(v)
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::U64(v as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::F64(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Str(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Str(v)
    }
}
