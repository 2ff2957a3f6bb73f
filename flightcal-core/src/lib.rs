//! Core types for flightcal.
//!
//! This crate turns a plain-text itinerary into calendar events:
//! - `itinerary` splits the raw text into `FlightRecord`s
//! - `location` and `datetime` anchor each local time in its airport's zone
//! - `submit` drives a `CalendarClient` over the whole batch

pub mod datetime;
pub mod error;
pub mod event;
pub mod flight;
pub mod itinerary;
pub mod location;
pub mod observer;
pub mod submit;

pub use error::{FlightCalError, FlightCalResult};
pub use event::{CreatedEvent, ResolvedEvent};
pub use flight::FlightRecord;
pub use observer::{NoopObserver, Observer};
pub use submit::{CalendarClient, submit};
