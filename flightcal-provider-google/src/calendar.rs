//! Event creation through the Google Calendar API.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use flightcal_core::{CalendarClient, CreatedEvent, FlightCalError, FlightCalResult, ResolvedEvent};
use google_calendar::Client;
use google_calendar::types::{EventDateTime, SendUpdates};

use crate::session::Session;

pub trait ToGoogle {
    fn to_google(&self) -> google_calendar::types::Event;
}

impl ToGoogle for ResolvedEvent {
    fn to_google(&self) -> google_calendar::types::Event {
        google_calendar::types::Event {
            summary: self.title.clone(),
            description: self.description.clone(),
            start: Some(instant_to_google(&self.start)),
            end: Some(instant_to_google(&self.end)),
            ..Default::default()
        }
    }
}

/// Absolute instant plus the zone it was read in, so the event shows local times.
fn instant_to_google(instant: &DateTime<Tz>) -> EventDateTime {
    EventDateTime {
        date: None,
        date_time: Some(instant.with_timezone(&Utc)),
        time_zone: instant.timezone().name().to_string(),
    }
}

pub struct GoogleCalendar {
    client: Client,
}

impl GoogleCalendar {
    /// Build an authenticated client from the OAuth files.
    pub async fn connect(credentials_path: &Path, token_path: &Path) -> Result<Self> {
        let session = Session::load_valid(credentials_path, token_path).await?;

        Ok(GoogleCalendar {
            client: session.client(),
        })
    }

    async fn insert(&self, calendar_id: &str, event: &ResolvedEvent) -> Result<CreatedEvent> {
        let google_event = event.to_google();

        let response = self
            .client
            .events()
            .insert(
                calendar_id,
                0,
                0,
                false,
                SendUpdates::None,
                false,
                &google_event,
            )
            .await
            .with_context(|| format!("Failed to create event: {}", &google_event.summary))?;

        Ok(CreatedEvent {
            id: response.body.id,
            html_link: response.body.html_link,
        })
    }
}

impl CalendarClient for GoogleCalendar {
    async fn create_event(
        &self,
        calendar_id: &str,
        event: &ResolvedEvent,
    ) -> FlightCalResult<CreatedEvent> {
        self.insert(calendar_id, event)
            .await
            .map_err(|e| FlightCalError::Remote(format!("{:#}", e)))
    }
}
