use tracing::{debug, info};

use crate::modules::revenue::models::{DaySummary, MultiDayJobRecord, ReportInputs};
use crate::modules::revenue::services::{AppointmentTally, JobClassifier, RevenueAllocator};

/// Summary for one day plus any multi-day diagnostics first seen on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAggregate {
    pub summary: DaySummary,
    pub multi_day_jobs: Vec<MultiDayJobRecord>,
}

/// Summaries for every day of the window, in window order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowAggregate {
    pub summaries: Vec<DaySummary>,
    pub multi_day_jobs: Vec<MultiDayJobRecord>,
}

/// Folds classified, allocated revenue into per-day summaries
pub struct DayAggregator {
    classifier: JobClassifier,
    allocator: RevenueAllocator,
}

impl DayAggregator {
    pub fn new(classifier: JobClassifier, allocator: RevenueAllocator) -> Self {
        Self {
            classifier,
            allocator,
        }
    }

    /// Aggregate one day of the window
    ///
    /// Jobs without a resolved record are skipped. Lead and plan-sale counts
    /// are independent of the department outcome, so a job can count toward
    /// both a department and leads. Returns `None` when `day_index` is
    /// outside the window.
    pub fn aggregate(
        &self,
        inputs: &ReportInputs,
        tally: &AppointmentTally,
        day_index: usize,
    ) -> Option<DayAggregate> {
        let date = *inputs.days.get(day_index)?;
        let mut summary = DaySummary::new(date);
        let mut multi_day_jobs = Vec::new();
        let mut unresolved = 0usize;

        for job_id in tally.jobs_on_day(day_index) {
            let Some(job) = inputs.jobs.get(&job_id) else {
                unresolved += 1;
                continue;
            };

            let label = inputs.job_types.label(job.job_type_id);
            let classification = self.classifier.classify(label);
            let allocation =
                self.allocator
                    .allocate_for_day(job_id, job, label, tally, &inputs.days, day_index);

            if let Some(record) = allocation.multi_day {
                multi_day_jobs.push(record);
            }

            if classification.is_lead {
                summary.record_lead(allocation.revenue);
            }

            if classification.is_plan_sale {
                summary.record_plan_sale();
            }

            match classification.department {
                Some(department) => summary.record_department(department, allocation.revenue),
                None => summary.record_excluded(),
            }
        }

        if unresolved > 0 {
            debug!(day = %date, unresolved, "Skipped jobs without a resolvable record");
        }

        Some(DayAggregate {
            summary,
            multi_day_jobs,
        })
    }

    /// Tally the window's appointments and aggregate every day
    pub fn aggregate_window(&self, inputs: &ReportInputs) -> WindowAggregate {
        let tally = AppointmentTally::tally(&inputs.appointments_by_day);
        let mut summaries = Vec::with_capacity(inputs.days.len());
        let mut multi_day_jobs = Vec::new();

        for aggregate in
            (0..inputs.days.len()).filter_map(|day_index| self.aggregate(inputs, &tally, day_index))
        {
            info!(
                day = %aggregate.summary.date,
                jobs = aggregate.summary.total_jobs,
                revenue = %aggregate.summary.total_revenue,
                leads = aggregate.summary.leads_run,
                excluded = aggregate.summary.excluded,
                "Aggregated day"
            );
            summaries.push(aggregate.summary);
            multi_day_jobs.extend(aggregate.multi_day_jobs);
        }

        WindowAggregate {
            summaries,
            multi_day_jobs,
        }
    }
}
