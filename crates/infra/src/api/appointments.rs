//! HTTP adapter for the appointments backend.
//!
//! Implements the core `AppointmentReader` port (the edit-flow fetch) and
//! `SnapshotSource` (full dataset reload). A transport failure maps to
//! `FixwiseError::Network`; a non-2xx response maps to `FixwiseError::Api`
//! with the server's status and body. Neither applies partial state.

use async_trait::async_trait;
use chrono::NaiveDate;
use fixwise_core::{AppointmentReader, SnapshotSource};
use fixwise_domain::{AppointmentDetail, CalendarConfig, FixwiseError, Result, SlotDataset};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::InfraError;
use crate::http::HttpClient;

/// Client for the appointments backend.
pub struct AppointmentsApi {
    http: HttpClient,
    base_url: String,
}

impl AppointmentsApi {
    /// Build the adapter from engine configuration.
    ///
    /// # Errors
    /// Returns `FixwiseError::Internal` if the HTTP client cannot be built.
    pub fn new(config: &CalendarConfig) -> Result<Self> {
        let http = HttpClient::from_config(&config.http)?;
        Ok(Self { http, base_url: config.api_base_url.trim_end_matches('/').to_owned() })
    }

    /// Adapter over an existing client, for tests and custom wiring.
    pub fn with_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self { http, base_url: base_url.into() }
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET request to appointments backend");

        let request = self.http.request(Method::GET, &url).query(query);
        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%url, status = status.as_u16(), "appointments backend rejected request");
            return Err(FixwiseError::Api { status: status.as_u16(), body });
        }

        let body = response.text().await.map_err(|err| InfraError::from(err).0)?;
        serde_json::from_str(&body).map_err(|err| InfraError::from(err).0)
    }
}

#[async_trait]
impl AppointmentReader for AppointmentsApi {
    async fn fetch_appointment(
        &self,
        fixer_id: &str,
        requester_id: &str,
        date: NaiveDate,
        hour: u32,
    ) -> Result<AppointmentDetail> {
        let query = [
            ("fixerId", fixer_id.to_owned()),
            ("requesterId", requester_id.to_owned()),
            ("date", date.format("%Y-%m-%d").to_string()),
            ("hour", hour.to_string()),
        ];
        self.get_json("/appointments/detail", &query).await
    }
}

#[async_trait]
impl SnapshotSource for AppointmentsApi {
    async fn load(&self, fixer_id: &str, from: NaiveDate, to: NaiveDate) -> Result<SlotDataset> {
        let query = [
            ("fixerId", fixer_id.to_owned()),
            ("from", from.format("%Y-%m-%d").to_string()),
            ("to", to.format("%Y-%m-%d").to_string()),
        ];
        self.get_json("/availability", &query).await
    }
}
