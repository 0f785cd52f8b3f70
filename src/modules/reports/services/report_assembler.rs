use chrono::{DateTime, Utc};

use crate::core::timezone::format_date;
use crate::modules::reports::models::{DayReport, ReportWindow, UpcomingReport};
use crate::modules::revenue::models::{DaySummary, MultiDayJobRecord};

/// Composes day summaries and diagnostics into the served report
pub struct ReportAssembler;

impl ReportAssembler {
    /// Build the report; performs no computation beyond composition
    ///
    /// # Arguments
    /// * `window` - Report days, today first
    /// * `summaries` - One summary per window day, in window order
    /// * `multi_day_jobs` - Diagnostics; omitted from the report when empty
    /// * `generated_at` - Timestamp stamped on the report
    pub fn assemble(
        window: &ReportWindow,
        summaries: &[DaySummary],
        multi_day_jobs: Vec<MultiDayJobRecord>,
        generated_at: DateTime<Utc>,
    ) -> UpcomingReport {
        let days = summaries
            .iter()
            .enumerate()
            .map(|(index, summary)| Self::day_report(window, index, summary))
            .collect();

        UpcomingReport {
            timestamp: generated_at,
            days,
            multi_day_jobs: if multi_day_jobs.is_empty() {
                None
            } else {
                Some(multi_day_jobs)
            },
        }
    }

    fn day_report(window: &ReportWindow, index: usize, summary: &DaySummary) -> DayReport {
        DayReport {
            date: format_date(summary.date),
            label: window.label(index),
            is_today: index == 0,
            total_jobs: summary.total_jobs,
            total_revenue: summary.display_total_revenue(),
            departments: summary.departments.clone(),
            leads_run: summary.leads_run,
            leads_revenue: summary.display_leads_revenue(),
            plan_sales: summary.plan_sales,
            excluded: summary.excluded,
        }
    }
}
