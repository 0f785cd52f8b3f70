//! Wire types for the ServiceTitan job planning API

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::revenue::models::{
    Appointment, AppointmentStatus, Job, JobId, JobTypeId,
};

/// One page of a paginated listing
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobTypeRecord {
    pub id: JobTypeId,
    #[serde(default)]
    pub name: String,
}

/// Only the job link and status matter; ids and timestamps are ignored
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(default)]
    pub job_id: Option<JobId>,
    #[serde(default)]
    pub status: Option<String>,
}

impl AppointmentRecord {
    pub fn status(&self) -> AppointmentStatus {
        AppointmentStatus::from_platform(self.status.as_deref().unwrap_or(""))
    }
}

impl From<AppointmentRecord> for Appointment {
    fn from(record: AppointmentRecord) -> Self {
        let status = record.status();
        // Zero is never a real job id
        let job_id = record.job_id.filter(|id| *id != 0);
        Appointment::new(job_id, status)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: JobId,
    #[serde(default)]
    pub job_type_id: Option<JobTypeId>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total: Option<Decimal>,
}

impl From<JobRecord> for Job {
    fn from(record: JobRecord) -> Self {
        Job::new(record.job_type_id, record.total.unwrap_or(Decimal::ZERO))
    }
}

/// OAuth client-credentials token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}
