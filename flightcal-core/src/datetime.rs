//! Parsing itinerary date-times in the zone of the airport they belong to.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;

use crate::error::{FlightCalError, FlightCalResult};

/// Itinerary date-time layout, e.g. "Jan  2 15:04 2024".
///
/// `%e` is the space-padded day of month. chrono reads this layout loosely
/// (any whitespace run, short years, one-digit minutes), so input is checked
/// against `check_shape` first.
pub const LAYOUT: &str = "%b %e %H:%M %Y";

/// Look up an IANA zone identifier.
pub fn load_zone(zone: &str) -> FlightCalResult<Tz> {
    zone.parse::<Tz>()
        .map_err(|_| FlightCalError::InvalidTimezone(zone.to_string()))
}

/// Interpret `raw` as a wall-clock reading in `zone`.
///
/// The same text gives a different instant for every zone. During a DST
/// overlap the earlier instant is used; a reading that falls in a DST gap
/// is an error.
pub fn parse_local_datetime(raw: &str, zone: &str) -> FlightCalResult<DateTime<Tz>> {
    let tz = load_zone(zone)?;

    check_shape(raw).map_err(|reason| FlightCalError::DateParse {
        raw: raw.to_string(),
        reason: reason.to_string(),
    })?;

    let naive = NaiveDateTime::parse_from_str(raw, LAYOUT).map_err(|e| FlightCalError::DateParse {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| FlightCalError::NonexistentLocalTime {
            raw: raw.to_string(),
            zone: zone.to_string(),
        })
}

/// Token shape of `LAYOUT`: `Mon _d H:MM YYYY`.
///
/// The day may be written "2", " 2" or "12"; the hour takes one or two
/// digits; minutes and year are fixed width. Separators are single spaces.
/// Value ranges are left to chrono.
fn check_shape(raw: &str) -> Result<(), &'static str> {
    let (month, rest) = raw
        .split_at_checked(3)
        .ok_or("expected a three-letter month")?;
    if !month.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("expected a three-letter month");
    }

    let rest = rest.strip_prefix(' ').ok_or("expected a space after the month")?;
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    let rest = take_digits(rest, 1, 2).ok_or("day must be one or two digits")?;

    let rest = rest.strip_prefix(' ').ok_or("expected a single space after the day")?;
    let rest = take_digits(rest, 1, 2).ok_or("hour must be one or two digits")?;
    let rest = rest.strip_prefix(':').ok_or("expected ':' between hour and minute")?;
    let rest = take_digits(rest, 2, 2).ok_or("minute must be two digits")?;

    let rest = rest.strip_prefix(' ').ok_or("expected a single space after the time")?;
    let rest = take_digits(rest, 4, 4).ok_or("year must be four digits")?;

    if !rest.is_empty() {
        return Err("unexpected text after the year");
    }

    Ok(())
}

/// Skip a run of `min..=max` ASCII digits, returning what follows.
fn take_digits(s: &str, min: usize, max: usize) -> Option<&str> {
    let n = s.bytes().take_while(u8::is_ascii_digit).count();
    (min..=max).contains(&n).then(|| &s[n..])
}

/// Render an instant back in the itinerary layout, in its own zone.
pub fn format_local(instant: &DateTime<Tz>) -> String {
    instant.format(LAYOUT).to_string()
}

/// RFC 3339 with a numeric offset, e.g. "2024-01-02T09:00:00+08:00".
pub fn to_rfc3339(instant: &DateTime<Tz>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, false)
}
