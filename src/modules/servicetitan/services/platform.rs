use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::Result;
use crate::modules::revenue::models::{Appointment, Job, JobId, JobTypeTable};

/// Read access to the scheduling platform the report is built from
///
/// Implementations surface transport, auth and malformed-page failures as
/// errors; the report service aborts on the first one.
#[async_trait]
pub trait SchedulingPlatform: Send + Sync {
    /// Full job-type lookup table
    async fn job_types(&self) -> Result<JobTypeTable>;

    /// Appointments starting on `day`, with cancelled and unused ones removed
    async fn appointments_for_day(&self, day: NaiveDate) -> Result<Vec<Appointment>>;

    /// A single job; `Ok(None)` when the platform has no record for it
    async fn job(&self, job_id: JobId) -> Result<Option<Job>>;

    /// Platform name for logging
    fn name(&self) -> &str;
}
