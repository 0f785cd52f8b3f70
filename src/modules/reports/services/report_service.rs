use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use futures_util::future::try_join_all;
use tracing::{info, warn};

use crate::core::timezone::ReportClock;
use crate::core::Result;
use crate::modules::reports::models::{ReportWindow, UpcomingReport};
use crate::modules::reports::services::ReportAssembler;
use crate::modules::revenue::models::{JobId, ReportInputs};
use crate::modules::revenue::services::{
    AppointmentTally, DayAggregator, JobClassifier, RevenueAllocator,
};
use crate::modules::servicetitan::{JobBatchFetcher, SchedulingPlatform};

/// Builds the upcoming-days report from live platform data
///
/// Any platform failure aborts the run; partial reports are never produced.
pub struct UpcomingReportService {
    platform: Arc<dyn SchedulingPlatform>,
    fetcher: JobBatchFetcher,
    aggregator: DayAggregator,
    clock: ReportClock,
}

impl UpcomingReportService {
    /// Create a new report service
    pub fn new(
        platform: Arc<dyn SchedulingPlatform>,
        fetcher: JobBatchFetcher,
        allocator: RevenueAllocator,
        clock: ReportClock,
    ) -> Self {
        Self {
            platform,
            fetcher,
            aggregator: DayAggregator::new(JobClassifier::new(), allocator),
            clock,
        }
    }

    /// Generate the report for today in the reporting zone
    pub async fn generate(&self) -> Result<UpcomingReport> {
        let now = Utc::now();
        self.generate_for(self.clock.local_date(now), now).await
    }

    /// Generate the report for the window starting at `today`
    ///
    /// # Arguments
    /// * `today` - First day of the window
    /// * `generated_at` - Timestamp stamped on the report
    pub async fn generate_for(
        &self,
        today: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> Result<UpcomingReport> {
        let window = ReportWindow::three_business_days(today);
        let inputs = self.collect_inputs(&window).await?;

        let aggregate = self.aggregator.aggregate_window(&inputs);
        if !aggregate.multi_day_jobs.is_empty() {
            info!(
                count = aggregate.multi_day_jobs.len(),
                "Split revenue for multi-day jobs"
            );
        }

        Ok(ReportAssembler::assemble(
            &window,
            &aggregate.summaries,
            aggregate.multi_day_jobs,
            generated_at,
        ))
    }

    /// Fetch everything the allocation engine needs for a window
    pub async fn collect_inputs(&self, window: &ReportWindow) -> Result<ReportInputs> {
        info!(
            platform = self.platform.name(),
            start = ?window.days().first(),
            days = window.len(),
            "Generating upcoming report"
        );

        let job_types = self.platform.job_types().await?;
        if job_types.is_empty() {
            warn!("Platform returned no job types; every job will be excluded");
        }

        let appointments_by_day = try_join_all(
            window
                .days()
                .iter()
                .map(|day| self.platform.appointments_for_day(*day)),
        )
        .await?;

        let job_ids: Vec<JobId> = AppointmentTally::tally(&appointments_by_day)
            .job_ids()
            .into_iter()
            .collect();

        let jobs = self.fetcher.fetch(self.platform.as_ref(), &job_ids).await?;

        Ok(ReportInputs {
            job_types,
            days: window.days().to_vec(),
            appointments_by_day,
            jobs,
        })
    }
}
