//! Appointment-based revenue allocation
//!
//! Pure, synchronous transformation from resolved platform data to per-day
//! summaries. Nothing in this module performs I/O or returns errors.

pub mod models;
pub mod services;

pub use models::{
    Appointment, AppointmentStatus, Classification, DaySummary, Department, DepartmentTotals,
    Job, JobId, JobTypeId, JobTypeTable, MultiDayJobRecord, ReportInputs,
};
pub use services::{AppointmentTally, DayAggregator, JobClassifier, RevenueAllocator};
