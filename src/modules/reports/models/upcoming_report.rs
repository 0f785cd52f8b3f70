use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::revenue::models::{Department, DepartmentTotals, MultiDayJobRecord};

/// One day of the upcoming report as served to the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    /// YYYY-MM-DD
    pub date: String,
    pub label: String,
    pub is_today: bool,
    pub total_jobs: u32,
    /// Whole currency units
    pub total_revenue: i64,
    pub departments: BTreeMap<Department, DepartmentTotals>,
    pub leads_run: u32,
    /// Whole currency units
    pub leads_revenue: i64,
    pub plan_sales: u32,
    pub excluded: u32,
}

/// Rolling multi-day operational report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingReport {
    /// Generation time
    pub timestamp: DateTime<Utc>,
    pub days: Vec<DayReport>,
    /// Omitted when no job has more than one appointment in the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_day_jobs: Option<Vec<MultiDayJobRecord>>,
}

impl UpcomingReport {
    pub fn day(&self, date: &str) -> Option<&DayReport> {
        self.days.iter().find(|day| day.date == date)
    }

    pub fn today(&self) -> Option<&DayReport> {
        self.days.iter().find(|day| day.is_today)
    }
}
