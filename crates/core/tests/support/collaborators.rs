//! Mock appointment reader and recording form collaborators.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use fixwise_core::{AppointmentReader, BookingForms};
use fixwise_domain::{AppointmentDetail, FixwiseError, Modality, Result};
use parking_lot::Mutex;
use uuid::Uuid;

/// Appointment reader that serves a canned response or a canned error.
pub struct StubReader {
    response: Mutex<Option<Result<AppointmentDetail>>>,
}

impl StubReader {
    /// Reader that resolves every fetch with `detail`.
    pub fn ok(detail: AppointmentDetail) -> Self {
        Self { response: Mutex::new(Some(Ok(detail))) }
    }

    /// Reader that fails every fetch with `err`.
    pub fn err(err: FixwiseError) -> Self {
        Self { response: Mutex::new(Some(Err(err))) }
    }
}

#[async_trait]
impl AppointmentReader for StubReader {
    async fn fetch_appointment(
        &self,
        _fixer_id: &str,
        _requester_id: &str,
        _date: NaiveDate,
        _hour: u32,
    ) -> Result<AppointmentDetail> {
        self.response
            .lock()
            .take()
            .unwrap_or_else(|| Err(FixwiseError::Internal("stub reader exhausted".into())))
    }
}

/// One observed form invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Create form opened with a booking instant.
    Create(DateTime<Utc>),
    /// Edit form opened with a hydrated appointment id.
    Edit(Uuid),
    /// Read-only details opened for a slot.
    Details(NaiveDate, u32),
}

/// Form collaborator that records every invocation.
#[derive(Default)]
pub struct RecordingForms {
    events: Mutex<Vec<FormEvent>>,
}

impl RecordingForms {
    /// Fresh recorder with no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events observed so far, in order.
    pub fn events(&self) -> Vec<FormEvent> {
        self.events.lock().clone()
    }
}

impl BookingForms for RecordingForms {
    fn open_create(&self, start: DateTime<Utc>) {
        self.events.lock().push(FormEvent::Create(start));
    }

    fn open_edit(&self, detail: AppointmentDetail) {
        self.events.lock().push(FormEvent::Edit(detail.id));
    }

    fn open_details(&self, date: NaiveDate, hour: u32) {
        self.events.lock().push(FormEvent::Details(date, hour));
    }
}

/// A plausible hydrated appointment for the edit-flow tests.
pub fn sample_detail(fixer_id: &str, requester_id: &str, date: NaiveDate, hour: u32) -> AppointmentDetail {
    AppointmentDetail {
        id: Uuid::new_v4(),
        fixer_id: fixer_id.to_owned(),
        requester_id: requester_id.to_owned(),
        date,
        hour,
        requester_name: "Ana Torres".into(),
        requester_phone: "+1-555-0100".into(),
        modality: Modality::Presential,
        description: "Kitchen sink repair".into(),
        meeting_link: None,
        latitude: Some(18.4655),
        longitude: Some(-66.1057),
        address: Some("Calle Luna 12".into()),
    }
}
