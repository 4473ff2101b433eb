use crate::config::CaptureConfig;
use crate::core::capture::CaptureHandle;
use crate::core::store::EventStore;
use crate::domain::model::{CapturedEvent, FieldValue};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::subscriber::Interest;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// `tracing_subscriber` layer that captures every enabled event into a store
/// shared with a [`CaptureHandle`]. Compose it onto a registry and install
/// that as the (thread or global) default subscriber; `install`/`init` in the
/// crate root do exactly that.
pub struct CaptureLayer {
    store: Arc<EventStore>,
}

impl CaptureLayer {
    pub fn new() -> (Self, CaptureHandle) {
        Self::with_config(CaptureConfig::default())
    }

    pub fn with_config(config: CaptureConfig) -> (Self, CaptureHandle) {
        let store = Arc::new(EventStore::new(&config));
        let layer = Self {
            store: Arc::clone(&store),
        };
        (layer, CaptureHandle::new(store))
    }
}

/// Span fields rendered to strings, stashed in the span's extensions so the
/// event path can assemble the scope context without revisiting the callsite.
struct SpanFields(BTreeMap<String, String>);

#[derive(Default)]
struct SpanVisitor {
    fields: BTreeMap<String, String>,
}

impl Visit for SpanVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: BTreeMap<String, FieldValue>,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), FieldValue::Bool(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), FieldValue::I64(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), FieldValue::U64(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), FieldValue::F64(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields
                .insert(field.name().to_string(), FieldValue::Str(value.to_string()));
        }
    }

    fn record_error(&mut self, _field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.error = Some(value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(
                field.name().to_string(),
                FieldValue::Debug(format!("{:?}", value)),
            );
        }
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        // Level overrides change at runtime; enablement must never be cached.
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Spans always pass so scope context accumulates no matter the level.
        if !metadata.is_event() {
            return true;
        }
        *metadata.level() <= self.store.effective_level(metadata.target())
    }

    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let mut visitor = SpanVisitor::default();
        attrs.record(&mut visitor);
        span.extensions_mut().insert(SpanFields(visitor.fields));
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let mut visitor = SpanVisitor::default();
        values.record(&mut visitor);
        let mut extensions = span.extensions_mut();
        match extensions.get_mut::<SpanFields>() {
            Some(fields) => fields.0.extend(visitor.fields),
            None => extensions.insert(SpanFields(visitor.fields)),
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        // from_root yields outermost first, so inner spans win on collision.
        let mut context = BTreeMap::new();
        if let Some(scope) = ctx.event_scope(event) {
            for span in scope.from_root() {
                let extensions = span.extensions();
                if let Some(fields) = extensions.get::<SpanFields>() {
                    for (key, value) in &fields.0 {
                        context.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        self.store.record(CapturedEvent {
            seq: self.store.next_seq(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
            context,
            error: visitor.error,
            thread_name: std::thread::current()
                .name()
                .unwrap_or("unnamed")
                .to_string(),
            timestamp: Utc::now(),
            module_path: metadata.module_path().map(str::to_string),
            file: metadata.file().map(str::to_string),
            line: metadata.line(),
        });
    }
}
