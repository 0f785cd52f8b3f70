use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::money;
use crate::modules::revenue::models::Department;

/// Jobs and allocated pre-tax revenue for one department on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepartmentTotals {
    pub jobs: u32,
    /// Sum of cent-rounded allocations; not rounded further
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rev: Decimal,
}

/// Aggregated figures for a single business day
///
/// Recomputed from scratch on every report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub departments: BTreeMap<Department, DepartmentTotals>,
    pub leads_run: u32,
    pub leads_revenue: Decimal,
    pub plan_sales: u32,
    pub total_jobs: u32,
    pub total_revenue: Decimal,
    pub excluded: u32,
}

impl DaySummary {
    /// Empty summary with all four departments present
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            departments: Department::ordered()
                .into_iter()
                .map(|department| (department, DepartmentTotals::default()))
                .collect(),
            leads_run: 0,
            leads_revenue: Decimal::ZERO,
            plan_sales: 0,
            total_jobs: 0,
            total_revenue: Decimal::ZERO,
            excluded: 0,
        }
    }

    pub fn record_department(&mut self, department: Department, revenue: Decimal) {
        let totals = self.departments.entry(department).or_default();
        totals.jobs += 1;
        totals.rev += revenue;
        self.total_jobs += 1;
        self.total_revenue += revenue;
    }

    pub fn record_lead(&mut self, revenue: Decimal) {
        self.leads_run += 1;
        self.leads_revenue += revenue;
    }

    pub fn record_plan_sale(&mut self) {
        self.plan_sales += 1;
    }

    pub fn record_excluded(&mut self) {
        self.excluded += 1;
    }

    pub fn department(&self, department: Department) -> DepartmentTotals {
        self.departments
            .get(&department)
            .copied()
            .unwrap_or_default()
    }

    /// Total revenue rounded to whole currency units for display
    pub fn display_total_revenue(&self) -> i64 {
        money::whole_units(self.total_revenue)
    }

    /// Lead revenue rounded to whole currency units for display
    pub fn display_leads_revenue(&self) -> i64 {
        money::whole_units(self.leads_revenue)
    }
}
