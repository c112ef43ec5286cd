//! Click-to-action dispatch.
//!
//! The pure mapping from (state, role) to an [`Action`] is separated from
//! [`ClickHandler`], the service that executes it. The handler re-resolves
//! the slot state from the live queries at click time, so a snapshot that
//! changed since render never dispatches a create against a slot that has
//! become booked.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use fixwise_domain::{Result, Role, RoleContext, SlotState, TimeSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ports::{AppointmentReader, BookingForms, RoleSource, SlotQueries};
use super::resolver::resolve;

/// The role/state-appropriate reaction to a cell click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    /// Open the create form for a new booking at the given instant.
    CreateAppointment {
        /// Booking instant sent to the backend (slot start plus the
        /// configured hour offset, serialized as UTC).
        start: DateTime<Utc>,
    },
    /// Hydrate the appointment from the backend, then open the edit form.
    FetchAndEditAppointment {
        /// The fixer whose calendar is being viewed.
        fixer_id: String,
        /// The requester who owns the booking.
        requester_id: String,
        /// Slot date.
        date: NaiveDate,
        /// Slot start hour.
        hour: u32,
    },
    /// Open the read-only details view for the slot.
    ViewReadOnlyDetails {
        /// Slot date.
        date: NaiveDate,
        /// Slot start hour.
        hour: u32,
    },
    /// Nothing to do for this (state, role) pair.
    Noop,
}

/// Pure mapping from (state, role) to the action a click performs.
///
/// A viewer whose role could not be resolved gets `Noop` for every state.
pub fn action_for(
    slot: TimeSlot,
    state: SlotState,
    ctx: &RoleContext,
    booking_hour_offset: i64,
) -> Action {
    match ctx.role {
        Some(Role::Requester) => match state {
            SlotState::Available | SlotState::CancelledByOtherRequester => {
                Action::CreateAppointment { start: slot.booking_instant(booking_hour_offset) }
            }
            SlotState::BookedBySelf => match ctx.viewer_requester() {
                Some(requester_id) => Action::FetchAndEditAppointment {
                    fixer_id: ctx.fixer_id.clone(),
                    requester_id: requester_id.to_owned(),
                    date: slot.date,
                    hour: slot.hour,
                },
                None => Action::Noop,
            },
            _ => Action::Noop,
        },
        Some(Role::Fixer) => match state {
            SlotState::BookedOccupiedView | SlotState::BookedBySelf | SlotState::BookedByOther => {
                Action::ViewReadOnlyDetails { date: slot.date, hour: slot.hour }
            }
            _ => Action::Noop,
        },
        None => Action::Noop,
    }
}

/// Executes cell clicks against the live snapshot and the form ports.
pub struct ClickHandler {
    queries: Arc<dyn SlotQueries>,
    reader: Arc<dyn AppointmentReader>,
    forms: Arc<dyn BookingForms>,
    roles: Arc<dyn RoleSource>,
    booking_hour_offset: i64,
}

impl ClickHandler {
    /// Wire the handler to its collaborators.
    pub fn new(
        queries: Arc<dyn SlotQueries>,
        reader: Arc<dyn AppointmentReader>,
        forms: Arc<dyn BookingForms>,
        roles: Arc<dyn RoleSource>,
        booking_hour_offset: i64,
    ) -> Self {
        Self { queries, reader, forms, roles, booking_hour_offset }
    }

    /// Handle a click on `slot`, returning the action that was executed.
    ///
    /// State is re-resolved here rather than trusted from render time. The
    /// edit flow awaits the backend fetch; a failed fetch propagates as an
    /// error without opening any form or touching local state, and failures
    /// stay local to this click.
    ///
    /// # Errors
    /// Propagates `FixwiseError::Network` / `FixwiseError::Api` from the
    /// appointment fetch.
    pub async fn handle_click(&self, slot: TimeSlot) -> Result<Action> {
        let ctx = self.roles.role_context();
        let state = resolve(slot.date, slot.hour, ctx.viewer_requester(), self.queries.as_ref());
        let action = action_for(slot, state, &ctx, self.booking_hour_offset);

        debug!(date = %slot.date, hour = slot.hour, ?state, ?action, "dispatching slot click");

        match &action {
            Action::CreateAppointment { start } => self.forms.open_create(*start),
            Action::FetchAndEditAppointment { fixer_id, requester_id, date, hour } => {
                let detail = self
                    .reader
                    .fetch_appointment(fixer_id, requester_id, *date, *hour)
                    .await
                    .inspect_err(|err| {
                        warn!(date = %date, hour, error = %err, "appointment fetch failed; edit aborted");
                    })?;
                self.forms.open_edit(detail);
            }
            Action::ViewReadOnlyDetails { date, hour } => self.forms.open_details(*date, *hour),
            Action::Noop => {}
        }

        Ok(action)
    }
}
