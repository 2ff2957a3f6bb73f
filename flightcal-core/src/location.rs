//! Airport name to time zone lookup.

use crate::error::{FlightCalError, FlightCalResult};

/// Every location the itinerary may name, with its IANA zone.
const LOCATION_ZONES: &[(&str, &str)] = &[
    ("Hong Kong", "Asia/Hong_Kong"),
    ("Tokyo(Haneda)", "Asia/Tokyo"),
    ("Tokyo(Narita)", "Asia/Tokyo"),
    ("Vancouver", "Canada/Pacific"),
    ("Montreal", "Canada/Eastern"),
];

/// Resolve a location name to its time zone identifier.
///
/// Names outside the table are an error, never a fallback zone.
pub fn resolve_zone(location: &str) -> FlightCalResult<&'static str> {
    LOCATION_ZONES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, zone)| *zone)
        .ok_or_else(|| FlightCalError::UnknownLocation(location.to_string()))
}

/// Location names accepted by `resolve_zone`.
pub fn known_locations() -> impl Iterator<Item = &'static str> {
    LOCATION_ZONES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;

    #[test]
    fn test_resolve_zone_known_locations() {
        assert_eq!(resolve_zone("Hong Kong").unwrap(), "Asia/Hong_Kong");
        assert_eq!(resolve_zone("Tokyo(Haneda)").unwrap(), "Asia/Tokyo");
        assert_eq!(resolve_zone("Tokyo(Narita)").unwrap(), "Asia/Tokyo");
        assert_eq!(resolve_zone("Vancouver").unwrap(), "Canada/Pacific");
        assert_eq!(resolve_zone("Montreal").unwrap(), "Canada/Eastern");
    }

    #[test]
    fn test_resolve_zone_rejects_unknown_location() {
        for name in ["Osaka", "hong kong", "Tokyo", "", " Vancouver"] {
            match resolve_zone(name) {
                Err(FlightCalError::UnknownLocation(got)) => assert_eq!(got, name),
                other => panic!("Expected UnknownLocation for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_unknown_location_error_lists_known_names() {
        let message = resolve_zone("Osaka").unwrap_err().to_string();

        assert!(message.contains("'Osaka'"));
        for name in known_locations() {
            assert!(message.contains(name), "{} missing from: {}", name, message);
        }
    }

    #[test]
    fn test_every_zone_is_in_tz_database() {
        for name in known_locations() {
            let zone = resolve_zone(name).unwrap();
            assert!(zone.parse::<Tz>().is_ok(), "{} maps to unknown zone {}", name, zone);
        }
    }
}
