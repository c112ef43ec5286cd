//! Slot identity and the derived slot-state enumeration

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single addressable unit of bookable time, identified by calendar date
/// and hour of day (0-23).
///
/// Slot identity is immutable; state is re-derived from the backing data on
/// every render, never stored on the slot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// Hour of day, 0-23.
    pub hour: u32,
}

impl TimeSlot {
    /// Create a slot for the given date and hour.
    pub const fn new(date: NaiveDate, hour: u32) -> Self {
        Self { date, hour }
    }

    /// Slot start as a UTC instant, without any backend offset applied.
    pub fn start_utc(&self) -> DateTime<Utc> {
        self.date
            .and_hms_opt(self.hour.min(23), 0, 0)
            .unwrap_or_else(|| self.date.and_time(chrono::NaiveTime::MIN))
            .and_utc()
    }

    /// The instant sent to the backend when booking this slot.
    ///
    /// The backend expects slot timestamps shifted by a fixed hour offset
    /// (see `CalendarConfig::booking_hour_offset`).
    pub fn booking_instant(&self, hour_offset: i64) -> DateTime<Utc> {
        self.start_utc() + Duration::hours(hour_offset)
    }

    /// Whether the slot's start lies before the given instant.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        self.start_utc() < now
    }
}

/// Who holds the active booking on a slot, relative to the viewing requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingOwnership {
    /// The viewing requester owns the booking.
    Viewer,
    /// A different requester owns the booking.
    Other,
    /// No active booking on the slot.
    None,
}

/// Residual cancellation marker on a slot, relative to the viewing requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CancellationKind {
    /// No cancellation history on the slot.
    None,
    /// The fixer cancelled the viewer's booking.
    ByFixer,
    /// The viewer cancelled their own booking.
    ByRequester,
    /// The fixer cancelled another requester's booking.
    ByOtherFixer,
    /// Another requester cancelled their own booking.
    ByOtherRequester,
}

/// The single authoritative state of a calendar cell.
///
/// Derived on every render from bookings, fixer occupancy, availability
/// windows, and cancellation history; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotState {
    /// Offerable and unclaimed.
    Available,
    /// Booked by the viewing requester.
    BookedBySelf,
    /// Booked by a different requester.
    BookedByOther,
    /// The fixer has a booking on the slot, viewed without requester context.
    BookedOccupiedView,
    /// The fixer has not declared the hour offerable.
    Disabled,
    /// The viewer's booking was cancelled by the fixer.
    CancelledByFixer,
    /// The viewer cancelled their own booking.
    CancelledByRequester,
    /// Another requester's booking was cancelled by the fixer.
    CancelledByOtherFixer,
    /// Another requester cancelled their own booking.
    CancelledByOtherRequester,
}

impl SlotState {
    /// All slot states, in resolver precedence order.
    pub const ALL: [Self; 9] = [
        Self::BookedBySelf,
        Self::BookedByOther,
        Self::BookedOccupiedView,
        Self::Disabled,
        Self::CancelledByFixer,
        Self::CancelledByRequester,
        Self::CancelledByOtherFixer,
        Self::CancelledByOtherRequester,
        Self::Available,
    ];
}
