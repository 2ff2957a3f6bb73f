//! Hooks for operator-facing diagnostics.
//!
//! The parser and submitter report progress here instead of printing, so the
//! binary decides what the operator sees and tests can stay silent.

use crate::event::{CreatedEvent, ResolvedEvent};
use crate::flight::FlightRecord;

pub trait Observer {
    /// Called once for every record the parser produces.
    fn flight_parsed(&self, _flight: &FlightRecord) {}

    /// Called after the calendar service accepted an event.
    fn event_created(&self, _event: &ResolvedEvent, _created: &CreatedEvent) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
