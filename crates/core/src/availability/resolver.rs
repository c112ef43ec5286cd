//! Slot-state derivation.
//!
//! A slot can simultaneously be "not enabled" and "previously cancelled";
//! the fixed precedence order below is what makes the derived state
//! authoritative. Booking state always dominates disablement and
//! cancellation history, and self-booking always dominates other-booking.

use chrono::NaiveDate;
use fixwise_domain::{BookingOwnership, CancellationKind, SlotState};

use super::ports::SlotQueries;

/// Derive the single authoritative state for one (date, hour) cell.
///
/// Total and deterministic: for a fixed snapshot and viewer identity every
/// input combination maps to exactly one state. Slots whose window status
/// is unknown read as not enabled and therefore resolve to
/// [`SlotState::Disabled`], never to `Available`.
pub fn resolve(
    date: NaiveDate,
    hour: u32,
    viewer_requester: Option<&str>,
    queries: &dyn SlotQueries,
) -> SlotState {
    match queries.booking_for(date, hour, viewer_requester) {
        BookingOwnership::Viewer => return SlotState::BookedBySelf,
        BookingOwnership::Other => return SlotState::BookedByOther,
        BookingOwnership::None => {}
    }

    if queries.is_hour_booked_fixer(date, hour) {
        return SlotState::BookedOccupiedView;
    }

    if !queries.is_enabled(date, hour) {
        return SlotState::Disabled;
    }

    match queries.cancellation_for(date, hour, viewer_requester) {
        CancellationKind::ByFixer => SlotState::CancelledByFixer,
        CancellationKind::ByRequester => SlotState::CancelledByRequester,
        CancellationKind::ByOtherFixer => SlotState::CancelledByOtherFixer,
        CancellationKind::ByOtherRequester => SlotState::CancelledByOtherRequester,
        CancellationKind::None => SlotState::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed query answers for exercising every resolver branch.
    struct FixedQueries {
        booking: BookingOwnership,
        fixer_booked: bool,
        enabled: bool,
        cancellation: CancellationKind,
    }

    impl SlotQueries for FixedQueries {
        fn is_hour_booked_fixer(&self, _: NaiveDate, _: u32) -> bool {
            self.fixer_booked
        }

        fn booking_for(&self, _: NaiveDate, _: u32, _: Option<&str>) -> BookingOwnership {
            self.booking
        }

        fn is_enabled(&self, _: NaiveDate, _: u32) -> bool {
            self.enabled
        }

        fn cancellation_for(&self, _: NaiveDate, _: u32, _: Option<&str>) -> CancellationKind {
            self.cancellation
        }
    }

    fn slot_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn resolve_fixed(queries: &FixedQueries) -> SlotState {
        resolve(slot_date(), 14, Some("req-1"), queries)
    }

    #[test]
    fn self_booking_dominates_everything() {
        let queries = FixedQueries {
            booking: BookingOwnership::Viewer,
            fixer_booked: true,
            enabled: false,
            cancellation: CancellationKind::ByFixer,
        };
        assert_eq!(resolve_fixed(&queries), SlotState::BookedBySelf);
    }

    #[test]
    fn other_booking_dominates_occupancy_and_disablement() {
        let queries = FixedQueries {
            booking: BookingOwnership::Other,
            fixer_booked: true,
            enabled: false,
            cancellation: CancellationKind::ByOtherRequester,
        };
        assert_eq!(resolve_fixed(&queries), SlotState::BookedByOther);
    }

    #[test]
    fn fixer_occupancy_dominates_disablement() {
        let queries = FixedQueries {
            booking: BookingOwnership::None,
            fixer_booked: true,
            enabled: false,
            cancellation: CancellationKind::None,
        };
        assert_eq!(resolve_fixed(&queries), SlotState::BookedOccupiedView);
    }

    #[test]
    fn disablement_dominates_cancellation_history() {
        let queries = FixedQueries {
            booking: BookingOwnership::None,
            fixer_booked: false,
            enabled: false,
            cancellation: CancellationKind::ByRequester,
        };
        assert_eq!(resolve_fixed(&queries), SlotState::Disabled);
    }

    #[test]
    fn cancellation_kinds_map_one_to_one() {
        let cases = [
            (CancellationKind::ByFixer, SlotState::CancelledByFixer),
            (CancellationKind::ByRequester, SlotState::CancelledByRequester),
            (CancellationKind::ByOtherFixer, SlotState::CancelledByOtherFixer),
            (CancellationKind::ByOtherRequester, SlotState::CancelledByOtherRequester),
        ];
        for (kind, expected) in cases {
            let queries = FixedQueries {
                booking: BookingOwnership::None,
                fixer_booked: false,
                enabled: true,
                cancellation: kind,
            };
            assert_eq!(resolve_fixed(&queries), expected);
        }
    }

    #[test]
    fn clean_enabled_slot_is_available() {
        let queries = FixedQueries {
            booking: BookingOwnership::None,
            fixer_booked: false,
            enabled: true,
            cancellation: CancellationKind::None,
        };
        assert_eq!(resolve_fixed(&queries), SlotState::Available);
    }

    #[test]
    fn resolution_is_deterministic() {
        let queries = FixedQueries {
            booking: BookingOwnership::None,
            fixer_booked: false,
            enabled: true,
            cancellation: CancellationKind::ByOtherFixer,
        };
        assert_eq!(resolve_fixed(&queries), resolve_fixed(&queries));
    }
}
