//! Appointment records, availability windows, and the hydrated detail
//! returned by the backend for the edit flow

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a persisted appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppointmentStatus {
    /// The booking stands.
    Active,
    /// The fixer withdrew from the booking.
    CancelledByFixer,
    /// The requester withdrew from the booking.
    CancelledByRequester,
}

impl AppointmentStatus {
    /// Whether this status is one of the cancelled variants.
    pub const fn is_cancelled(self) -> bool {
        matches!(self, Self::CancelledByFixer | Self::CancelledByRequester)
    }
}

/// A persisted appointment as read from the backend.
///
/// Owned by the backend; the engine only reads it to derive slot states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Backend-assigned identifier.
    pub id: Uuid,
    /// The service-providing party.
    pub fixer_id: String,
    /// The service-seeking party.
    pub requester_id: String,
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// Start hour of the slot, 0-23.
    pub hour: u32,
    /// Lifecycle status.
    pub status: AppointmentStatus,
}

/// A fixer-declared flag marking one (date, hour) as offerable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    /// Owning fixer.
    pub fixer_id: String,
    /// Calendar date the flag applies to.
    pub date: NaiveDate,
    /// Hour of day the flag applies to, 0-23.
    pub hour: u32,
    /// Whether the hour is offerable.
    pub enabled: bool,
}

/// How the appointment is carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Modality {
    /// In-person appointment at a physical location.
    Presential,
    /// Remote appointment over a meeting link.
    Virtual,
}

/// Fully-hydrated appointment record fetched before opening the edit form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetail {
    /// Backend-assigned identifier.
    pub id: Uuid,
    /// The service-providing party.
    pub fixer_id: String,
    /// The service-seeking party.
    pub requester_id: String,
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// Start hour of the slot, 0-23.
    pub hour: u32,
    /// Requester display name.
    pub requester_name: String,
    /// Requester contact phone.
    pub requester_phone: String,
    /// Presential or virtual.
    pub modality: Modality,
    /// Free-form description of the requested service.
    pub description: String,
    /// Meeting link for virtual appointments.
    pub meeting_link: Option<String>,
    /// Latitude of the service location, if presential.
    pub latitude: Option<f64>,
    /// Longitude of the service location, if presential.
    pub longitude: Option<f64>,
    /// Street address of the service location, if presential.
    pub address: Option<String>,
}

/// One fixer's slot dataset for a date range: the raw inputs every slot
/// state is derived from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDataset {
    /// All appointments (active and cancelled) in the range.
    pub appointments: Vec<Appointment>,
    /// All declared availability windows in the range.
    pub windows: Vec<AvailabilityWindow>,
}
