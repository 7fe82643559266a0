//! # Calendar API
//!
//! The two create-only calls the planner makes against the backend: create a
//! calendar from the hangout metadata, then attach the proposed slots to it.

use async_trait::async_trait;
use eyre::{eyre, Result, WrapErr};
use hangout_core::models::calendar::{
    CreateCalendarRequest, CreateCalendarResponse, CreateTimeSlotsRequest,
};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ClientConfig;

#[async_trait]
pub trait CalendarApi: Send + Sync {
    /// Creates a calendar and returns its identifier.
    async fn create_calendar(&self, request: &CreateCalendarRequest)
        -> Result<CreateCalendarResponse>;

    /// Attaches slots to an existing calendar.
    async fn create_time_slots(
        &self,
        calendar_id: Uuid,
        request: &CreateTimeSlotsRequest,
    ) -> Result<()>;
}

/// [`CalendarApi`] over HTTP.
pub struct HttpCalendarApi {
    client: Client,
    config: ClientConfig,
}

impl HttpCalendarApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl CalendarApi for HttpCalendarApi {
    async fn create_calendar(
        &self,
        request: &CreateCalendarRequest,
    ) -> Result<CreateCalendarResponse> {
        let url = self.config.endpoint("/calendars");
        info!("Creating calendar {:?}", request.title);
        debug!("API URL: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .wrap_err("Failed to reach the calendar API")?;
        let response = ensure_success(response, "create calendar").await?;

        let created = response
            .json::<CreateCalendarResponse>()
            .await
            .wrap_err("Unexpected create calendar response")?;
        info!("Created calendar {}", created.id);

        Ok(created)
    }

    async fn create_time_slots(
        &self,
        calendar_id: Uuid,
        request: &CreateTimeSlotsRequest,
    ) -> Result<()> {
        let url = self
            .config
            .endpoint(&format!("/calendars/{}/time-slots", calendar_id));
        info!(
            "Creating {} time slots for calendar {}",
            request.time_slots.len(),
            calendar_id
        );
        debug!("API URL: {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .wrap_err("Failed to reach the calendar API")?;
        ensure_success(response, "create time slots").await?;

        Ok(())
    }
}

async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_default();
    Err(eyre!("Failed to {} ({}): {}", action, status, error_text))
}
