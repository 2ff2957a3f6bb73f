//! Google Calendar backend for flightcal.
//!
//! Reads the OAuth files produced by Google's quickstart flow:
//!   credentials.json  (client secret downloaded from the Cloud console)
//!   token.json        (access/refresh token for the user)

pub mod calendar;
pub mod credentials;
pub mod session;

pub use calendar::GoogleCalendar;
