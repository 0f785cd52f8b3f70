use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::revenue::models::JobId;

/// Appointments a multi-day job has on one day of the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAppointments {
    pub day: NaiveDate,
    pub appointments: u32,
}

/// Diagnostic entry for a job with more than one appointment in the window
///
/// Built once, on the first day the job has appointments, and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDayJobRecord {
    pub job_id: JobId,
    pub job_type: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub full_revenue: Decimal,
    pub total_appointments: u32,
    /// Only days with at least one appointment, in window order
    pub day_breakdown: Vec<DayAppointments>,
}
