//! A single itinerary entry, exactly as it appeared in the input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One flight from the itinerary.
///
/// Fields are kept as raw text. Nothing is validated until the record is
/// resolved into an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub flight_number: String,
    /// Departure wall-clock time, e.g. "Jan  2 09:00 2024"
    pub start_date_time: String,
    pub start_location: String,
    /// Arrival wall-clock time, local to `end_location`
    pub end_date_time: String,
    pub end_location: String,
}

impl FlightRecord {
    /// Build a record from the five data lines of an itinerary block, in file order.
    pub fn from_lines(lines: [&str; 5]) -> Self {
        let [flight_number, start_date_time, start_location, end_date_time, end_location] = lines;

        FlightRecord {
            flight_number: flight_number.to_string(),
            start_date_time: start_date_time.to_string(),
            start_location: start_location.to_string(),
            end_date_time: end_date_time.to_string(),
            end_location: end_location.to_string(),
        }
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {}}}",
            self.flight_number,
            self.start_date_time,
            self.start_location,
            self.end_date_time,
            self.end_location
        )
    }
}
