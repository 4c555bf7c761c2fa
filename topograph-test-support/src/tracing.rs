//! In-memory subscriber layer for asserting on spans and events in tests.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ::tracing::field::{Field, Visit};
use ::tracing::span::{Attributes, Id, Record};
use ::tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Layer that keeps every closed span and emitted event for later inspection.
///
/// Clones share one journal, so a test can hand a clone to the subscriber and
/// keep the original for assertions.
///
/// ```
/// use topograph_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let span = tracing::info_span!("demo", answer = 42_u64);
///     let _entered = span.enter();
///     tracing::warn!("inside");
/// });
/// assert_eq!(layer.spans_named("demo").len(), 1);
/// assert_eq!(layer.events_at(tracing::Level::WARN).len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    journal: Arc<Mutex<Journal>>,
}

#[derive(Default)]
struct Journal {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    /// Closed spans in the order they closed.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.journal().spans.clone()
    }

    /// Events in the order they were emitted.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.journal().events.clone()
    }

    /// Closed spans carrying `name`.
    #[must_use]
    pub fn spans_named(&self, name: &str) -> Vec<SpanRecord> {
        self.journal()
            .spans
            .iter()
            .filter(|span| span.name == name)
            .cloned()
            .collect()
    }

    /// Events emitted at exactly `level`.
    #[must_use]
    pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
        self.journal()
            .events
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }

    fn journal(&self) -> MutexGuard<'_, Journal> {
        // A panicking test must not hide the records gathered before it.
        self.journal.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A span as it looked when it closed, including values recorded late.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Name from the span metadata.
    pub name: String,
    /// Field values rendered as strings.
    pub fields: HashMap<String, String>,
}

impl SpanRecord {
    /// Rendered value of `field`, if the span recorded one.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// A single emitted event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Level from the event metadata.
    pub level: Level,
    /// Target from the event metadata.
    pub target: String,
    /// Field values rendered as strings; the message lives under `message`.
    pub fields: HashMap<String, String>,
}

impl EventRecord {
    /// Rendered value of `field`, if the event carried one.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

struct OpenSpan {
    name: &'static str,
    fields: HashMap<String, String>,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut fields = HashMap::new();
        attrs.record(&mut Stringify(&mut fields));
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
            values.record(&mut Stringify(&mut open.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(open) = ctx
            .span(&id)
            .and_then(|span| span.extensions_mut().remove::<OpenSpan>())
        else {
            return;
        };
        self.journal().spans.push(SpanRecord {
            name: open.name.to_owned(),
            fields: open.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut Stringify(&mut fields));
        let metadata = event.metadata();
        self.journal().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

/// Renders strings verbatim and everything else through `Debug`.
///
/// Integers, booleans and `%`-captured values all come out as their plain
/// textual form through the default `Visit` forwarding.
struct Stringify<'a>(&'a mut HashMap<String, String>);

impl Visit for Stringify<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}
