//! In-memory availability snapshot backing the `SlotQueries` port.
//!
//! A snapshot is immutable once built. Refreshing swaps the whole `Arc`
//! behind a [`SnapshotHandle`], so cells rendered or clicked mid-refresh
//! keep reading a consistent dataset; there is no in-place mutation and no
//! optimistic local write.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use fixwise_core::{SlotQueries, SnapshotSource};
use fixwise_domain::{
    AppointmentStatus, BookingOwnership, CancellationKind, Result, SlotDataset,
};
use parking_lot::RwLock;
use tracing::info;

type SlotKey = (NaiveDate, u32);

/// Immutable slot dataset for one fixer, indexed for per-cell queries.
#[derive(Debug, Default)]
pub struct AvailabilitySnapshot {
    /// Active bookings: slot → owning requester.
    active: HashMap<SlotKey, String>,
    /// Slots declared offerable. Absence reads as not enabled, so unknown
    /// slots degrade to a disabled state rather than an available one.
    enabled: HashSet<SlotKey>,
    /// Cancellation residue: slot → (status, requester the booking belonged to).
    cancelled: HashMap<SlotKey, Vec<(AppointmentStatus, String)>>,
}

impl AvailabilitySnapshot {
    /// Snapshot with no data; every slot reads as disabled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index a fetched dataset for the given fixer.
    ///
    /// Appointments and windows belonging to other fixers are ignored;
    /// windows with `enabled == false` read the same as missing windows.
    pub fn from_dataset(fixer_id: &str, dataset: &SlotDataset) -> Self {
        let mut snapshot = Self::empty();

        for window in &dataset.windows {
            if window.fixer_id == fixer_id && window.enabled {
                snapshot.enabled.insert((window.date, window.hour));
            }
        }

        for appointment in &dataset.appointments {
            if appointment.fixer_id != fixer_id {
                continue;
            }
            let key = (appointment.date, appointment.hour);
            match appointment.status {
                AppointmentStatus::Active => {
                    snapshot.active.insert(key, appointment.requester_id.clone());
                }
                status => {
                    snapshot
                        .cancelled
                        .entry(key)
                        .or_default()
                        .push((status, appointment.requester_id.clone()));
                }
            }
        }

        snapshot
    }
}

fn cancellation_kind(
    status: AppointmentStatus,
    cancelled_requester: &str,
    viewer: Option<&str>,
) -> CancellationKind {
    let mine = viewer.is_some_and(|v| v == cancelled_requester);
    match (status, mine) {
        (AppointmentStatus::CancelledByFixer, true) => CancellationKind::ByFixer,
        (AppointmentStatus::CancelledByFixer, false) => CancellationKind::ByOtherFixer,
        (AppointmentStatus::CancelledByRequester, true) => CancellationKind::ByRequester,
        (AppointmentStatus::CancelledByRequester, false) => CancellationKind::ByOtherRequester,
        (AppointmentStatus::Active, _) => CancellationKind::None,
    }
}

/// Inspection order when a slot carries several cancellation records:
/// records involving the viewer come first, fixer cancellations before
/// requester ones.
const fn kind_rank(kind: CancellationKind) -> u8 {
    match kind {
        CancellationKind::ByFixer => 0,
        CancellationKind::ByRequester => 1,
        CancellationKind::ByOtherFixer => 2,
        CancellationKind::ByOtherRequester => 3,
        CancellationKind::None => u8::MAX,
    }
}

impl SlotQueries for AvailabilitySnapshot {
    fn is_hour_booked_fixer(&self, date: NaiveDate, hour: u32) -> bool {
        self.active.contains_key(&(date, hour))
    }

    fn booking_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> BookingOwnership {
        match (self.active.get(&(date, hour)), requester) {
            (Some(owner), Some(viewer)) if owner == viewer => BookingOwnership::Viewer,
            (Some(_), _) => BookingOwnership::Other,
            (None, _) => BookingOwnership::None,
        }
    }

    fn is_enabled(&self, date: NaiveDate, hour: u32) -> bool {
        self.enabled.contains(&(date, hour))
    }

    fn cancellation_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> CancellationKind {
        self.cancelled
            .get(&(date, hour))
            .into_iter()
            .flatten()
            .map(|(status, cancelled_requester)| {
                cancellation_kind(*status, cancelled_requester, requester)
            })
            .min_by_key(|kind| kind_rank(*kind))
            .unwrap_or(CancellationKind::None)
    }
}

/// Shared, swappable handle to the current snapshot.
///
/// Implements `SlotQueries` by delegating to the snapshot installed at call
/// time, which is what lets a click re-resolve against fresher data than
/// the render that produced the cell.
#[derive(Default)]
pub struct SnapshotHandle {
    current: RwLock<Arc<AvailabilitySnapshot>>,
}

impl SnapshotHandle {
    /// Handle starting from an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot currently installed.
    pub fn current(&self) -> Arc<AvailabilitySnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Install a replacement snapshot. Readers holding the previous `Arc`
    /// are unaffected.
    pub fn replace(&self, snapshot: AvailabilitySnapshot) {
        *self.current.write() = Arc::new(snapshot);
    }
}

impl SlotQueries for SnapshotHandle {
    fn is_hour_booked_fixer(&self, date: NaiveDate, hour: u32) -> bool {
        self.current().is_hour_booked_fixer(date, hour)
    }

    fn booking_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> BookingOwnership {
        self.current().booking_for(date, hour, requester)
    }

    fn is_enabled(&self, date: NaiveDate, hour: u32) -> bool {
        self.current().is_enabled(date, hour)
    }

    fn cancellation_for(
        &self,
        date: NaiveDate,
        hour: u32,
        requester: Option<&str>,
    ) -> CancellationKind {
        self.current().cancellation_for(date, hour, requester)
    }
}

/// Re-fetches the slot dataset and installs replacement snapshots.
pub struct SnapshotRefresher {
    source: Arc<dyn SnapshotSource>,
    handle: Arc<SnapshotHandle>,
}

impl SnapshotRefresher {
    /// Wire the refresher to its dataset source and target handle.
    pub fn new(source: Arc<dyn SnapshotSource>, handle: Arc<SnapshotHandle>) -> Self {
        Self { source, handle }
    }

    /// Fetch `[from, to]` for the fixer and swap in the rebuilt snapshot.
    ///
    /// # Errors
    /// Propagates fetch errors; on failure the previous snapshot stays
    /// installed untouched.
    pub async fn refresh(&self, fixer_id: &str, from: NaiveDate, to: NaiveDate) -> Result<()> {
        let dataset = self.source.load(fixer_id, from, to).await?;
        let appointments = dataset.appointments.len();
        let windows = dataset.windows.len();

        self.handle.replace(AvailabilitySnapshot::from_dataset(fixer_id, &dataset));
        info!(fixer_id, %from, %to, appointments, windows, "availability snapshot refreshed");
        Ok(())
    }
}
