use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::auth::{ServiceTitanAuth, TokenCache};
use super::platform::SchedulingPlatform;
use crate::config::ServiceTitanConfig;
use crate::core::timezone::format_date;
use crate::core::{AppError, Result};
use crate::modules::revenue::models::{Appointment, Job, JobId, JobTypeTable};
use crate::modules::servicetitan::models::{AppointmentRecord, JobRecord, JobTypeRecord, Page};

/// Page size used when listing job types
pub const JOB_TYPES_PAGE_SIZE: u32 = 100;

/// Page size used when listing a day's appointments
pub const APPOINTMENTS_PAGE_SIZE: u32 = 200;

/// ServiceTitan job planning API client
///
/// API Documentation: https://developer.servicetitan.io/apis/
pub struct ServiceTitanClient {
    client: Client,
    auth: ServiceTitanAuth,
    token_cache: Mutex<TokenCache>,
    app_key: String,
    jpm_base_url: String,
    max_pages: u32,
}

impl ServiceTitanClient {
    /// Create a new ServiceTitan client
    ///
    /// # Arguments
    /// * `config` - Credentials and endpoints
    /// * `max_pages` - Upper bound on pages fetched per listing
    pub fn new(config: &ServiceTitanConfig, max_pages: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            auth: ServiceTitanAuth::new(client.clone(), config),
            client,
            token_cache: Mutex::new(TokenCache::new()),
            app_key: config.app_key.clone(),
            jpm_base_url: config.jpm_base_url(),
            max_pages,
        })
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    async fn access_token(&self) -> Result<String> {
        let mut cache = self.token_cache.lock().await;
        self.auth.access_token(&mut cache).await
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let token = self.access_token().await?;

        self.client
            .get(url)
            .bearer_auth(token)
            .header("ST-App-Key", &self.app_key)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("ServiceTitan API error: {}", e)))
    }

    /// Collect every item of a paginated listing, stopping after `max_pages` pages
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        page_size: u32,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();

        for page in 1..=self.max_pages {
            let mut params = query.to_vec();
            params.push(("page", page.to_string()));
            params.push(("pageSize", page_size.to_string()));

            let response = self.get(url, &params).await?;
            let status = response.status();
            if !status.is_success() {
                let error_body = response.text().await.unwrap_or_default();
                error!(%url, page, status = %status, "ServiceTitan listing failed");
                return Err(AppError::Gateway(format!(
                    "ServiceTitan API error {} on {} page {}: {}",
                    status, url, page, error_body
                )));
            }

            let body: Page<T> = response.json().await.map_err(|e| {
                AppError::Gateway(format!("Failed to parse ServiceTitan page: {}", e))
            })?;

            items.extend(body.data);
            if !body.has_more {
                return Ok(items);
            }
        }

        warn!(
            %url,
            max_pages = self.max_pages,
            "Page limit reached; listing truncated"
        );
        Ok(items)
    }
}

#[async_trait]
impl SchedulingPlatform for ServiceTitanClient {
    async fn job_types(&self) -> Result<JobTypeTable> {
        let url = format!("{}/job-types", self.jpm_base_url);
        let records: Vec<JobTypeRecord> = self.fetch_all(&url, &[], JOB_TYPES_PAGE_SIZE).await?;

        debug!(count = records.len(), "Fetched job types");
        Ok(records
            .into_iter()
            .map(|record| (record.id, record.name))
            .collect())
    }

    async fn appointments_for_day(&self, day: NaiveDate) -> Result<Vec<Appointment>> {
        let url = format!("{}/appointments", self.jpm_base_url);
        let next_day = day + Duration::days(1);
        let query = [
            ("startsOnOrAfter", format_date(day)),
            ("startsBefore", format_date(next_day)),
        ];

        let records: Vec<AppointmentRecord> = self
            .fetch_all(&url, &query, APPOINTMENTS_PAGE_SIZE)
            .await?;
        let fetched = records.len();

        let appointments: Vec<Appointment> = records
            .into_iter()
            .filter(|record| record.status().is_counted())
            .map(Appointment::from)
            .collect();

        debug!(
            day = %day,
            fetched,
            kept = appointments.len(),
            "Fetched appointments"
        );
        Ok(appointments)
    }

    async fn job(&self, job_id: JobId) -> Result<Option<Job>> {
        let url = format!("{}/jobs/{}", self.jpm_base_url, job_id);
        let response = self.get(&url, &[]).await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!(job_id, "Job not found");
                Ok(None)
            }
            status if status.is_success() => {
                let record: JobRecord = response.json().await.map_err(|e| {
                    AppError::Gateway(format!("Failed to parse ServiceTitan job {}: {}", job_id, e))
                })?;
                Ok(Some(Job::from(record)))
            }
            status => {
                let error_body = response.text().await.unwrap_or_default();
                Err(AppError::Gateway(format!(
                    "ServiceTitan API error {} for job {}: {}",
                    status, job_id, error_body
                )))
            }
        }
    }

    fn name(&self) -> &str {
        "servicetitan"
    }
}
