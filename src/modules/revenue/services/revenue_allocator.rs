use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money;
use crate::modules::revenue::models::{DayAppointments, Job, JobId, MultiDayJobRecord};
use crate::modules::revenue::services::AppointmentTally;

/// One job's share of revenue on one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAllocation {
    /// Cent-rounded pre-tax revenue attributed to the day
    pub revenue: Decimal,
    /// Present only on the first day of a job with more than one appointment
    pub multi_day: Option<MultiDayJobRecord>,
}

/// Splits a job's pre-tax revenue across the days it has appointments
///
/// Each day's share is proportional to that day's appointment count and is
/// rounded to the cent on its own, so a job split over `n` days sums back to
/// its full pre-tax revenue within `n` cents.
#[derive(Debug, Clone, Copy)]
pub struct RevenueAllocator {
    tax_rate: Decimal,
}

impl RevenueAllocator {
    /// # Arguments
    /// * `tax_rate` - Tax multiplier to divide out of job totals (e.g. 1.13); must be positive
    pub fn new(tax_rate: Decimal) -> Self {
        Self { tax_rate }
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Job total with the flat tax removed, rounded half-up to the cent
    pub fn pre_tax_revenue(&self, job: &Job) -> Decimal {
        money::round_cents(job.total / self.tax_rate)
    }

    /// Revenue attributed to a day holding `day_count` of the job's `total_count` appointments
    ///
    /// A zero `day_count` means the day's count is unknown and falls back to 1;
    /// a zero `total_count` falls back to 1 as well, so a job with no tallied
    /// appointments still reports its full revenue on the day it was referenced.
    /// When the day holds every appointment the full pre-tax revenue is returned.
    pub fn allocate(&self, job: &Job, day_count: u32, total_count: u32) -> Decimal {
        let pre_tax = self.pre_tax_revenue(job);
        let day_count = if day_count == 0 { 1 } else { day_count };
        let total_count = if total_count == 0 { 1 } else { total_count };

        if day_count == total_count {
            return pre_tax;
        }

        money::round_cents(pre_tax * Decimal::from(day_count) / Decimal::from(total_count))
    }

    /// Allocate a job's revenue for one day of the tallied window
    ///
    /// # Arguments
    /// * `job_id` - Job being allocated
    /// * `job` - Resolved job record
    /// * `job_type` - Display label of the job's type, copied into diagnostics
    /// * `tally` - Appointment counts for the whole window
    /// * `days` - Window dates, aligned with the tally
    /// * `day_index` - Day being aggregated
    pub fn allocate_for_day(
        &self,
        job_id: JobId,
        job: &Job,
        job_type: &str,
        tally: &AppointmentTally,
        days: &[NaiveDate],
        day_index: usize,
    ) -> DayAllocation {
        let day_count = tally.day_count(day_index, job_id);
        let total_count = tally.total_count(job_id);
        let revenue = self.allocate(job, day_count, total_count);

        let multi_day = self.multi_day_record(job_id, job, job_type, tally, days, day_index);
        if multi_day.is_some() {
            debug!(
                job_id,
                job_type,
                day_count,
                total_count,
                days = tally.days_spanned(job_id),
                %revenue,
                "Splitting multi-day job revenue"
            );
        }

        DayAllocation { revenue, multi_day }
    }

    /// Diagnostic record for a job with more than one appointment in the window
    ///
    /// Only produced for the first day on which the job has appointments, so
    /// each job yields at most one record per window. Several appointments on
    /// a single day qualify; the breakdown then holds just that day.
    pub fn multi_day_record(
        &self,
        job_id: JobId,
        job: &Job,
        job_type: &str,
        tally: &AppointmentTally,
        days: &[NaiveDate],
        day_index: usize,
    ) -> Option<MultiDayJobRecord> {
        if tally.total_count(job_id) <= 1 {
            return None;
        }
        if tally.first_active_day(job_id) != Some(day_index) {
            return None;
        }

        let day_breakdown = tally
            .breakdown(job_id)
            .into_iter()
            .filter_map(|(index, appointments)| {
                days.get(index).map(|day| DayAppointments {
                    day: *day,
                    appointments,
                })
            })
            .collect();

        Some(MultiDayJobRecord {
            job_id,
            job_type: job_type.to_string(),
            full_revenue: self.pre_tax_revenue(job),
            total_appointments: tally.total_count(job_id),
            day_breakdown,
        })
    }
}
