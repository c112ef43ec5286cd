//! Scriptable in-memory calendar implementing the `SlotQueries` port.
//!
//! Interior mutability lets a test change the backing data between a render
//! and a click, which is exactly the stale-snapshot situation the click
//! handler must cope with.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use fixwise_core::SlotQueries;
use fixwise_domain::{AppointmentStatus, BookingOwnership, CancellationKind};
use parking_lot::RwLock;

type SlotKey = (NaiveDate, u32);

#[derive(Default)]
struct CalendarData {
    /// Active bookings: slot → owning requester id.
    bookings: HashMap<SlotKey, String>,
    /// Slots the fixer declared offerable.
    enabled: HashSet<SlotKey>,
    /// Cancellation residue: slot → (status, requester the booking belonged to).
    cancellations: HashMap<SlotKey, (AppointmentStatus, String)>,
}

/// Scriptable calendar dataset.
#[derive(Default)]
pub struct ScriptedCalendar {
    data: RwLock<CalendarData>,
}

impl ScriptedCalendar {
    /// Empty calendar; every slot reads as not enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a slot offerable.
    pub fn enable(&self, date: NaiveDate, hour: u32) {
        self.data.write().enabled.insert((date, hour));
    }

    /// Record an active booking owned by `requester`.
    pub fn book(&self, date: NaiveDate, hour: u32, requester: &str) {
        self.data.write().bookings.insert((date, hour), requester.to_owned());
    }

    /// Record cancellation residue on a slot.
    pub fn cancel(&self, date: NaiveDate, hour: u32, status: AppointmentStatus, requester: &str) {
        self.data.write().cancellations.insert((date, hour), (status, requester.to_owned()));
    }
}

impl SlotQueries for ScriptedCalendar {
    fn is_hour_booked_fixer(&self, date: NaiveDate, hour: u32) -> bool {
        self.data.read().bookings.contains_key(&(date, hour))
    }

    fn booking_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> BookingOwnership {
        match (self.data.read().bookings.get(&(date, hour)), requester) {
            (Some(owner), Some(viewer)) if owner == viewer => BookingOwnership::Viewer,
            (Some(_), _) => BookingOwnership::Other,
            (None, _) => BookingOwnership::None,
        }
    }

    fn is_enabled(&self, date: NaiveDate, hour: u32) -> bool {
        self.data.read().enabled.contains(&(date, hour))
    }

    fn cancellation_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> CancellationKind {
        let data = self.data.read();
        let Some((status, cancelled_requester)) = data.cancellations.get(&(date, hour)) else {
            return CancellationKind::None;
        };
        let mine = requester.is_some_and(|viewer| viewer == cancelled_requester);
        match (status, mine) {
            (AppointmentStatus::CancelledByFixer, true) => CancellationKind::ByFixer,
            (AppointmentStatus::CancelledByFixer, false) => CancellationKind::ByOtherFixer,
            (AppointmentStatus::CancelledByRequester, true) => CancellationKind::ByRequester,
            (AppointmentStatus::CancelledByRequester, false) => CancellationKind::ByOtherRequester,
            (AppointmentStatus::Active, _) => CancellationKind::None,
        }
    }
}
