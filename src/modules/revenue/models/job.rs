use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Platform-assigned job identifier
pub type JobId = i64;

/// Platform-assigned job-type identifier
pub type JobTypeId = i64;

/// Job-type id to display label, loaded once per report run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobTypeTable {
    labels: HashMap<JobTypeId, String>,
}

impl JobTypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: JobTypeId, label: impl Into<String>) {
        self.labels.insert(id, label.into());
    }

    /// Label for a job type; unknown or missing ids resolve to an empty label
    pub fn label(&self, id: Option<JobTypeId>) -> &str {
        id.and_then(|id| self.labels.get(&id))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(JobTypeId, S)> for JobTypeTable {
    fn from_iter<I: IntoIterator<Item = (JobTypeId, S)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(id, label)| (id, label.into()))
                .collect(),
        }
    }
}

/// Appointment lifecycle as far as the report cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Scheduled, dispatched, working, on hold or done
    Active,
    Cancelled,
    Unused,
    /// Missing or unrecognised status; still counted
    Other,
}

impl AppointmentStatus {
    /// Map a platform status string (case-insensitive)
    pub fn from_platform(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "canceled" | "cancelled" => Self::Cancelled,
            "unused" => Self::Unused,
            "scheduled" | "dispatched" | "working" | "hold" | "done" => Self::Active,
            _ => Self::Other,
        }
    }

    /// Whether an appointment with this status counts as work on its day
    pub fn is_counted(self) -> bool {
        !matches!(self, Self::Cancelled | Self::Unused)
    }
}

/// A single visit on one day, optionally linked to a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub job_id: Option<JobId>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn new(job_id: Option<JobId>, status: AppointmentStatus) -> Self {
        Self { job_id, status }
    }

    /// Active appointment for a job
    pub fn for_job(job_id: JobId) -> Self {
        Self::new(Some(job_id), AppointmentStatus::Active)
    }
}

/// Resolved job record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub job_type_id: Option<JobTypeId>,
    /// Tax-inclusive job total
    pub total: Decimal,
}

impl Job {
    pub fn new(job_type_id: Option<JobTypeId>, total: Decimal) -> Self {
        Self { job_type_id, total }
    }
}

/// Everything the allocation engine needs for one report run
///
/// `appointments_by_day` is aligned with `days`; jobs that could not be
/// resolved are simply absent from `jobs`.
#[derive(Debug, Clone, Default)]
pub struct ReportInputs {
    pub job_types: JobTypeTable,
    pub days: Vec<NaiveDate>,
    pub appointments_by_day: Vec<Vec<Appointment>>,
    pub jobs: HashMap<JobId, Job>,
}
