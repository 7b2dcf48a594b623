//! Diagnostics — injected reporting for organ wiring problems.
//!
//! Organs do not log through a process-wide singleton. Whoever constructs
//! them supplies a sink, and the organ reports events into it. Hosts can
//! forward events to their own logging, drop them, or collect them for
//! assertions in tests.

use crate::types::EntityId;
use serde::Serialize;

/// A diagnostic event raised while constructing or wiring organs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BodyEvent {
    /// No circulatory subsystem was found on the entity when a digesting
    /// organ was wired up. Warning-level: the organ still exists, but
    /// digestion will stall until the entity is rebuilt with one.
    CirculationMissing { entity: EntityId },
}

/// An injected reporting channel for [`BodyEvent`]s.
pub trait DiagnosticSink {
    /// Report one event. Implementations must not panic.
    fn report(&mut self, event: BodyEvent);
}

/// A sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _event: BodyEvent) {}
}

/// A sink that records every event, for inspection in tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<BodyEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events reported so far, in order.
    pub fn events(&self) -> &[BodyEvent] {
        &self.events
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&mut self, event: BodyEvent) {
        self.events.push(event);
    }
}
