//! flightcal - turn a plain-text flight itinerary into Google Calendar events
//!
//! Reads the itinerary from stdin, six lines per flight:
//!   flight number, departure time, departure airport,
//!   arrival time, arrival airport, blank
//!
//! and creates one event per flight in the calendar named by CAL_ID.

mod config;
mod observer;

use std::io::{self, Read};

use anyhow::{Context, Result};
use flightcal_core::{itinerary, submit};
use flightcal_provider_google::GoogleCalendar;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::observer::ConsoleObserver;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = Config::load()?;

    let calendar = GoogleCalendar::connect(&config.credentials_path, &config.token_path)
        .await
        .context("Unable to retrieve Calendar client")?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read itinerary from stdin")?;

    let console = ConsoleObserver::stdout();
    let flights = itinerary::parse_with(&input, &console);
    info!(count = flights.len(), calendar_id = %config.calendar_id, "Parsed itinerary");

    let created = submit(&flights, &calendar, &config.calendar_id, &console).await?;
    info!(count = created.len(), "All flights submitted");

    Ok(())
}
