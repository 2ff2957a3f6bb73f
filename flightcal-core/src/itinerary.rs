//! Itinerary text parsing.
//!
//! The input is a flat list of lines, six per flight:
//!
//! ```text
//! CX101
//! Jan  2 09:00 2024
//! Hong Kong
//! Jan  2 13:00 2024
//! Tokyo(Haneda)
//! <separator, ignored>
//! ```
//!
//! A trailing block shorter than six lines is dropped without error.

use tracing::debug;

use crate::flight::FlightRecord;
use crate::observer::{NoopObserver, Observer};

/// Lines per itinerary block: five data lines plus one separator.
pub const BLOCK_SIZE: usize = 6;

/// Parse an itinerary without reporting progress.
pub fn parse(raw: &str) -> Vec<FlightRecord> {
    parse_with(raw, &NoopObserver)
}

/// Parse an itinerary, reporting each record to `observer` as it is built.
pub fn parse_with(raw: &str, observer: &impl Observer) -> Vec<FlightRecord> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    lines
        .chunks_exact(BLOCK_SIZE)
        .map(|block| {
            let flight = FlightRecord::from_lines([block[0], block[1], block[2], block[3], block[4]]);
            debug!(flight_number = %flight.flight_number, "Parsed flight");
            observer.flight_parsed(&flight);
            flight
        })
        .collect()
}
