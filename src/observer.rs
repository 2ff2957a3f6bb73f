//! Operator-facing output on stdout.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};

use flightcal_core::{CreatedEvent, FlightRecord, Observer, ResolvedEvent};
use tracing::warn;

/// Prints each parsed flight and the link of each created event.
pub struct ConsoleObserver<W: Write> {
    out: RefCell<W>,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        ConsoleObserver {
            out: RefCell::new(out),
        }
    }

    fn line(&self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", args) {
            warn!("Failed to write output: {}", e);
        }
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn flight_parsed(&self, flight: &FlightRecord) {
        self.line(format_args!("{}", flight));
    }

    fn event_created(&self, _event: &ResolvedEvent, created: &CreatedEvent) {
        self.line(format_args!("Event created: {}", created.html_link));
    }
}
