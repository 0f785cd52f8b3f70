use std::collections::HashMap;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, info};

use super::platform::SchedulingPlatform;
use crate::core::{AppError, Result};
use crate::modules::revenue::models::{Job, JobId};

/// Resolves job records in fixed-size concurrent batches
///
/// A short pause between batches keeps the request rate within the
/// platform's limits.
#[derive(Debug, Clone, Copy)]
pub struct JobBatchFetcher {
    batch_size: usize,
    batch_delay: Duration,
}

impl JobBatchFetcher {
    pub fn new(batch_size: usize, batch_delay: Duration) -> Result<Self> {
        if batch_size == 0 {
            return Err(AppError::configuration("Job batch size must be greater than 0"));
        }

        Ok(Self {
            batch_size,
            batch_delay,
        })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Fetch every job, leaving out ids the platform has no record for
    ///
    /// The first error from any request aborts the whole fetch.
    pub async fn fetch(
        &self,
        platform: &dyn SchedulingPlatform,
        job_ids: &[JobId],
    ) -> Result<HashMap<JobId, Job>> {
        let mut jobs = HashMap::with_capacity(job_ids.len());
        let batches: Vec<&[JobId]> = job_ids.chunks(self.batch_size).collect();
        let batch_count = batches.len();

        for (index, batch) in batches.into_iter().enumerate() {
            let results = join_all(batch.iter().map(|job_id| platform.job(*job_id))).await;

            for (job_id, result) in batch.iter().zip(results) {
                if let Some(job) = result? {
                    jobs.insert(*job_id, job);
                }
            }

            debug!(batch = index + 1, of = batch_count, "Fetched job batch");

            if index + 1 < batch_count && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        info!(
            requested = job_ids.len(),
            resolved = jobs.len(),
            platform = platform.name(),
            "Resolved jobs"
        );
        Ok(jobs)
    }
}
