//! Common data types used throughout the availability engine

pub mod appointment;
pub mod role;
pub mod slot;

pub use appointment::{
    Appointment, AppointmentDetail, AppointmentStatus, AvailabilityWindow, Modality, SlotDataset,
};
pub use role::{Role, RoleContext};
pub use slot::{BookingOwnership, CancellationKind, SlotState, TimeSlot};
