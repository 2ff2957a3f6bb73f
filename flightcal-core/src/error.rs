//! Error types for flightcal.

use thiserror::Error;

use crate::location::known_locations;

/// Errors that can occur while resolving or submitting flights.
#[derive(Error, Debug)]
pub enum FlightCalError {
    #[error(
        "Unrecognized location: '{0}' (known locations: {known})",
        known = known_locations().collect::<Vec<_>>().join(", ")
    )]
    UnknownLocation(String),

    #[error("Unknown time zone: '{0}'")]
    InvalidTimezone(String),

    #[error("Invalid date-time '{raw}' (expected e.g. \"Jan  2 15:04 2024\"): {reason}")]
    DateParse { raw: String, reason: String },

    #[error("Local time '{raw}' does not exist in {zone}")]
    NonexistentLocalTime { raw: String, zone: String },

    #[error("Calendar service error: {0}")]
    Remote(String),

    #[error("Flight {flight_number}: {source}")]
    Flight {
        flight_number: String,
        #[source]
        source: Box<FlightCalError>,
    },
}

impl FlightCalError {
    /// Attach the flight number of the record that failed.
    pub fn for_flight(self, flight_number: &str) -> Self {
        FlightCalError::Flight {
            flight_number: flight_number.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for flightcal operations.
pub type FlightCalResult<T> = Result<T, FlightCalError>;
