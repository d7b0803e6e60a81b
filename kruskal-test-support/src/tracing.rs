//! Recording layer for capturing spans and events in tests.
//!
//! Install a [`RecordingLayer`] on a registry with
//! `tracing::subscriber::with_default`, run the code under test, then inspect
//! the snapshots returned by [`RecordingLayer::spans`] and
//! [`RecordingLayer::events`]. Field values are stored as strings: numbers and
//! booleans use their `Display` form, errors use their message, and anything
//! recorded through `Debug` keeps its `Debug` rendering.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ::tracing::field::{Field, Visit};
use ::tracing::span::{Attributes, Id, Record};
use ::tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

type FieldMap = HashMap<String, String>;

/// Layer that stores closed spans and emitted events for later assertions.
///
/// Clones share the same storage, so a test can keep one handle while the
/// subscriber owns another.
#[derive(Clone, Debug, Default)]
pub struct RecordingLayer {
    journal: Arc<Mutex<Journal>>,
}

#[derive(Debug, Default)]
struct Journal {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    /// Returns the closed spans in completion order.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// assert!(layer.spans().is_empty());
    /// ```
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.journal().spans.clone()
    }

    /// Returns the emitted events in emission order.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::tracing::RecordingLayer;
    ///
    /// let layer = RecordingLayer::default();
    /// assert!(layer.events().is_empty());
    /// ```
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.journal().events.clone()
    }

    /// Returns the first closed span called `name`, if any.
    #[must_use]
    pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
        self.journal()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    // A panicking assertion on another thread must not hide what was
    // recorded before it, so poisoning is ignored.
    fn journal(&self) -> MutexGuard<'_, Journal> {
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Snapshot of a closed span.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanRecord {
    /// Span name from the callsite metadata.
    pub name: String,
    /// Fields recorded when the span was created or later updated.
    pub fields: FieldMap,
}

impl SpanRecord {
    /// Returns the recorded value of `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Snapshot of an emitted event.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Fields attached to the event, including `message`.
    pub fields: FieldMap,
}

impl EventRecord {
    /// Returns the recorded value of `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the event message, if one was given.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

/// Span state kept in the registry extensions until the span closes.
struct OpenSpan {
    name: &'static str,
    fields: FieldMap,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut fields = FieldMap::new();
        attrs.record(&mut FieldCollector(&mut fields));
        span.extensions_mut().insert(OpenSpan {
            name: attrs.metadata().name(),
            fields,
        });
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
            values.record(&mut FieldCollector(&mut open.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
            return;
        };
        self.journal().spans.push(SpanRecord {
            name: open.name.to_owned(),
            fields: open.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldMap::new();
        event.record(&mut FieldCollector(&mut fields));
        let metadata = event.metadata();
        self.journal().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

struct FieldCollector<'a>(&'a mut FieldMap);

impl FieldCollector<'_> {
    fn insert(&mut self, field: &Field, value: impl fmt::Display) {
        self.0.insert(field.name().to_owned(), value.to_string());
    }
}

impl Visit for FieldCollector<'_> {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value);
    }

    fn record_i128(&mut self, field: &Field, value: i128) {
        self.insert(field, value);
    }

    fn record_u128(&mut self, field: &Field, value: u128) {
        self.insert(field, value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value);
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format_args!("{value:?}"));
    }
}
