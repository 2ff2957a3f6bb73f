//! Sequential submission of a batch of flights to a calendar service.

use tracing::info;

use crate::error::FlightCalResult;
use crate::event::{CreatedEvent, ResolvedEvent};
use crate::flight::FlightRecord;
use crate::observer::Observer;

/// A calendar service that can create events.
///
/// Implementations are shared read-only across the whole batch.
#[allow(async_fn_in_trait)]
pub trait CalendarClient {
    async fn create_event(
        &self,
        calendar_id: &str,
        event: &ResolvedEvent,
    ) -> FlightCalResult<CreatedEvent>;
}

/// Create one event per flight, in order.
///
/// The first failure stops the batch. Events created before it are left in
/// place and nothing after it is attempted.
pub async fn submit(
    flights: &[FlightRecord],
    client: &impl CalendarClient,
    calendar_id: &str,
    observer: &impl Observer,
) -> FlightCalResult<Vec<CreatedEvent>> {
    let mut created = Vec::with_capacity(flights.len());

    for flight in flights {
        let event = ResolvedEvent::resolve(flight)
            .map_err(|e| e.for_flight(&flight.flight_number))?;

        let result = client
            .create_event(calendar_id, &event)
            .await
            .map_err(|e| e.for_flight(&flight.flight_number))?;

        info!(
            flight_number = %flight.flight_number,
            event_id = %result.id,
            "Created calendar event"
        );
        observer.event_created(&event, &result);
        created.push(result);
    }

    Ok(created)
}
