//! Click-through reporting.
//!
//! The connector hands click events to a [`ClickSink`] and never waits on or inspects the outcome.

use std::panic::{AssertUnwindSafe, catch_unwind};

use common::click_event::ClickEvent;
use tracing::{info, warn};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Result,
    AutocompleteResult,
}

/// Receives click events.
///
/// `record` is called on the caller's thread and must return promptly; a sink that talks to
/// the network should queue the event and send it elsewhere.
pub trait ClickSink: Send + Sync {
    fn record(&self, kind: ClickKind, event: &ClickEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClickSink;

impl ClickSink for NoopClickSink {
    fn record(&self, _kind: ClickKind, _event: &ClickEvent) {}
}

/// Logs every click at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingClickSink;

impl ClickSink for TracingClickSink {
    fn record(&self, kind: ClickKind, event: &ClickEvent) {
        info!(?kind, query = %event.query, document_id = %event.document_id, tags = ?event.tags, "click");
    }
}

/// Forwards to `sink`, swallowing a panic so the caller is never affected.
pub(crate) fn dispatch(sink: &dyn ClickSink, kind: ClickKind, event: &ClickEvent) {
    if catch_unwind(AssertUnwindSafe(|| sink.record(kind, event))).is_err() {
        warn!(?kind, document_id = %event.document_id, "click sink panicked; event dropped");
    }
}
