//! Port interfaces for the availability engine's external collaborators.
//!
//! The backend owns appointments, windows, and role resolution; the UI owns
//! the booking forms. Everything crosses these traits.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use fixwise_domain::{
    AppointmentDetail, BookingOwnership, CancellationKind, Result, RoleContext, SlotDataset,
};

/// Read-only facade over the fetched slot dataset for one fixer.
///
/// Implementations answer from an immutable snapshot; a refresh replaces
/// the snapshot wholesale rather than mutating it, so concurrent
/// derivations always see a consistent view.
pub trait SlotQueries: Send + Sync {
    /// Whether the fixer has any active booking at the slot, regardless of
    /// which requester holds it.
    fn is_hour_booked_fixer(&self, date: NaiveDate, hour: u32) -> bool;

    /// Who holds the active booking at the slot, relative to the viewing
    /// requester (if any).
    fn booking_for(&self, date: NaiveDate, hour: u32, requester: Option<&str>)
        -> BookingOwnership;

    /// Whether the fixer has declared the hour offerable. Slots with no
    /// window record must read as not enabled.
    fn is_enabled(&self, date: NaiveDate, hour: u32) -> bool;

    /// Residual cancellation marker at the slot, relative to the viewing
    /// requester (if any).
    fn cancellation_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> CancellationKind;
}

/// Backend fetch that hydrates a full appointment record before the edit
/// form opens.
#[async_trait]
pub trait AppointmentReader: Send + Sync {
    /// Fetch the appointment at (fixer, requester, date, hour).
    ///
    /// # Errors
    /// `FixwiseError::Network` when the backend never responds,
    /// `FixwiseError::Api` for a non-success status. Either aborts the edit
    /// flow without partial state.
    async fn fetch_appointment(
        &self,
        fixer_id: &str,
        requester_id: &str,
        date: NaiveDate,
        hour: u32,
    ) -> Result<AppointmentDetail>;
}

/// Backend fetch of a fixer's full slot dataset for a date range, used to
/// build replacement snapshots.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Load all appointments and windows for the fixer in `[from, to]`.
    async fn load(&self, fixer_id: &str, from: NaiveDate, to: NaiveDate) -> Result<SlotDataset>;
}

/// Opaque UI collaborators owning the three booking forms.
///
/// The engine's only obligation is to invoke the correct one with
/// correctly-shaped input; form behaviour is out of scope.
pub trait BookingForms: Send + Sync {
    /// Open the create-appointment form for the given booking instant.
    fn open_create(&self, start: DateTime<Utc>);

    /// Open the edit form with a fully-hydrated appointment record.
    fn open_edit(&self, detail: AppointmentDetail);

    /// Open the read-only details view for a slot.
    fn open_details(&self, date: NaiveDate, hour: u32);
}

/// Supplies the viewer's role and identities, re-read on every derivation.
pub trait RoleSource: Send + Sync {
    /// Current role context for the viewer.
    fn role_context(&self) -> RoleContext;
}

/// Fixed role context, for embedding and tests.
#[derive(Debug, Clone)]
pub struct StaticRoles(pub RoleContext);

impl RoleSource for StaticRoles {
    fn role_context(&self) -> RoleContext {
        self.0.clone()
    }
}

/// Injectable time source so past-slot detection stays deterministic in
/// tests.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
