// Test helpers shared by the integration tests
//
// Provides an in-memory scheduling platform so the whole report pipeline can
// run without network access, plus fixtures for the job types and dates the
// dashboard sees in production.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use wtd_upcoming::core::timezone::ReportClock;
use wtd_upcoming::core::{AppError, Result};
use wtd_upcoming::reports::UpcomingReportService;
use wtd_upcoming::revenue::{Appointment, Job, JobId, JobTypeId, JobTypeTable, RevenueAllocator};
use wtd_upcoming::servicetitan::{JobBatchFetcher, SchedulingPlatform};

pub const INSTALL_HVAC: JobTypeId = 1;
pub const REPAIR: JobTypeId = 2;
pub const MAINTENANCE_1_PIECE: JobTypeId = 3;
pub const MEMBERSHIP_PLAN_VISIT: JobTypeId = 4;
pub const DUCT_CLEANING: JobTypeId = 5;
pub const SALES_VISIT: JobTypeId = 6;
pub const SALES_FOLLOW_UP: JobTypeId = 7;
pub const OFFICE_VISIT: JobTypeId = 8;

/// Job types as the platform names them
pub fn job_type_table() -> JobTypeTable {
    vec![
        (INSTALL_HVAC, "Install HVAC"),
        (REPAIR, "Repair"),
        (MAINTENANCE_1_PIECE, "Residential Maintenance 1 Piece"),
        (MEMBERSHIP_PLAN_VISIT, "Residential Membership Plan Visit"),
        (DUCT_CLEANING, "Residential Duct Cleaning"),
        (SALES_VISIT, "Sales Visit"),
        (SALES_FOLLOW_UP, "Sales Follow Up"),
        (OFFICE_VISIT, "Office Visit"),
    ]
    .into_iter()
    .collect()
}

/// Monday 2025-10-20
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 20).unwrap()
}

/// Friday 2025-10-24
pub fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 24).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn generated_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 20, 14, 0, 0).unwrap()
}

/// Scheduling platform backed by in-memory fixtures
#[derive(Default)]
pub struct InMemoryPlatform {
    job_types: JobTypeTable,
    appointments: HashMap<NaiveDate, Vec<Appointment>>,
    jobs: HashMap<JobId, Job>,
    failing_jobs: HashSet<JobId>,
    fail_appointments: bool,
    job_requests: AtomicUsize,
}

impl InMemoryPlatform {
    pub fn new() -> Self {
        Self {
            job_types: job_type_table(),
            ..Self::default()
        }
    }

    pub fn with_job(mut self, job_id: JobId, job_type_id: JobTypeId, total: Decimal) -> Self {
        self.jobs.insert(job_id, Job::new(Some(job_type_id), total));
        self
    }

    pub fn with_untyped_job(mut self, job_id: JobId, total: Decimal) -> Self {
        self.jobs.insert(job_id, Job::new(None, total));
        self
    }

    /// Add `count` appointments for `job_id` on `day`
    pub fn with_appointments(mut self, day: NaiveDate, job_id: JobId, count: usize) -> Self {
        let entries = self.appointments.entry(day).or_default();
        entries.extend(std::iter::repeat(Appointment::for_job(job_id)).take(count));
        self
    }

    pub fn with_appointment(self, day: NaiveDate, job_id: JobId) -> Self {
        self.with_appointments(day, job_id, 1)
    }

    /// Make the platform fail every request for `job_id`
    pub fn failing_job(mut self, job_id: JobId) -> Self {
        self.failing_jobs.insert(job_id);
        self
    }

    pub fn failing_appointments(mut self) -> Self {
        self.fail_appointments = true;
        self
    }

    pub fn job_requests(&self) -> usize {
        self.job_requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchedulingPlatform for InMemoryPlatform {
    async fn job_types(&self) -> Result<JobTypeTable> {
        Ok(self.job_types.clone())
    }

    async fn appointments_for_day(&self, day: NaiveDate) -> Result<Vec<Appointment>> {
        if self.fail_appointments {
            return Err(AppError::gateway(format!("appointments unavailable for {}", day)));
        }

        Ok(self
            .appointments
            .get(&day)
            .map(|appointments| {
                appointments
                    .iter()
                    .filter(|appointment| appointment.status.is_counted())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn job(&self, job_id: JobId) -> Result<Option<Job>> {
        self.job_requests.fetch_add(1, Ordering::SeqCst);

        if self.failing_jobs.contains(&job_id) {
            return Err(AppError::gateway(format!("job {} unavailable", job_id)));
        }

        Ok(self.jobs.get(&job_id).cloned())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

/// Report service over `platform` with production tunables
pub fn report_service(platform: Arc<InMemoryPlatform>) -> UpcomingReportService {
    UpcomingReportService::new(
        platform,
        JobBatchFetcher::new(15, Duration::ZERO).unwrap(),
        RevenueAllocator::new(Decimal::new(113, 2)),
        ReportClock::from_offset_hours(-5).unwrap(),
    )
}
