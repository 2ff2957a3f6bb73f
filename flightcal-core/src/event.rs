//! Calendar-facing form of a flight.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::datetime::{parse_local_datetime, to_rfc3339};
use crate::error::FlightCalResult;
use crate::flight::FlightRecord;
use crate::location::resolve_zone;

/// Prefix marking events this tool created
pub const TITLE_PREFIX: &str = "[Auto] ";

/// A flight with its local times pinned to absolute instants.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEvent {
    pub title: String,
    pub description: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl ResolvedEvent {
    /// Resolve both airports to zones and anchor each date-time in its own zone.
    pub fn resolve(flight: &FlightRecord) -> FlightCalResult<Self> {
        let start_zone = resolve_zone(&flight.start_location)?;
        let end_zone = resolve_zone(&flight.end_location)?;

        let start = parse_local_datetime(&flight.start_date_time, start_zone)?;
        let end = parse_local_datetime(&flight.end_date_time, end_zone)?;

        Ok(ResolvedEvent {
            title: format!("{}{}", TITLE_PREFIX, flight.flight_number),
            description: format!("{} > {}", flight.start_location, flight.end_location),
            start,
            end,
        })
    }

    pub fn start_rfc3339(&self) -> String {
        to_rfc3339(&self.start)
    }

    pub fn end_rfc3339(&self) -> String {
        to_rfc3339(&self.end)
    }
}

/// What the calendar service returned for a created event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub id: String,
    pub html_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlightCalError;

    fn cx101() -> FlightRecord {
        FlightRecord::from_lines([
            "CX101",
            "Jan  2 09:00 2024",
            "Hong Kong",
            "Jan  2 13:00 2024",
            "Tokyo(Haneda)",
        ])
    }

    #[test]
    fn test_resolve_builds_title_and_description() {
        let event = ResolvedEvent::resolve(&cx101()).unwrap();

        assert_eq!(event.title, "[Auto] CX101");
        assert_eq!(event.description, "Hong Kong > Tokyo(Haneda)");
    }

    #[test]
    fn test_resolve_uses_each_airports_zone() {
        let event = ResolvedEvent::resolve(&cx101()).unwrap();

        assert_eq!(event.start_rfc3339(), "2024-01-02T09:00:00+08:00");
        assert_eq!(event.end_rfc3339(), "2024-01-02T13:00:00+09:00");
        assert_eq!(event.start.timezone(), Tz::Asia__Hong_Kong);
        assert_eq!(event.end.timezone(), Tz::Asia__Tokyo);
    }

    #[test]
    fn test_resolve_fails_on_unknown_arrival() {
        let mut flight = cx101();
        flight.end_location = "Osaka".to_string();

        let result = ResolvedEvent::resolve(&flight);

        assert!(matches!(result, Err(FlightCalError::UnknownLocation(name)) if name == "Osaka"));
    }

    #[test]
    fn test_resolve_fails_on_bad_departure_time() {
        let mut flight = cx101();
        flight.start_date_time = "tomorrow morning".to_string();

        let result = ResolvedEvent::resolve(&flight);

        assert!(matches!(result, Err(FlightCalError::DateParse { .. })));
    }
}
