use crate::modules::revenue::models::{Classification, Department};

/// Exact job-type label to department mapping used by the dashboard
const DEPARTMENT_TABLE: &[(&str, Department)] = &[
    ("Install HVAC", Department::Install),
    ("Service - Old JT", Department::Service),
    ("Diagnostic or Call Out - Residential HVAC", Department::Service),
    ("Diagnostic or Call Out - Commercial HVAC", Department::Service),
    ("Repair", Department::Service),
    ("Workmanship Callback", Department::Service),
    ("Warranty Repair", Department::Service),
    ("Service Workmanship Callback", Department::Service),
    ("Commercial Maintenance", Department::Service),
    ("Imported Default JobType", Department::Service),
    ("Residential Maintenance 1 Piece", Department::Maintenance),
    ("Residential Maintenance 2 piece", Department::Maintenance),
    // Misspelled label exists in the platform as-is
    ("Residential Maintanance 2 Piece", Department::Maintenance),
    ("Residential Membership Plan Visit", Department::Maintenance),
    ("Residential Duct Cleaning", Department::Ducts),
];

/// Sales appointment types counted as leads
const LEAD_LABELS: &[&str] = &["Sales Visit", "Sales Follow Up"];

/// Membership visit types counted toward the plan-sales goal
const PLAN_SALE_LABELS: &[&str] = &["Residential Membership Plan Visit"];

/// Maps job-type labels to report categories
///
/// Lookups are exact and case-sensitive. Unknown labels are a normal outcome
/// and classify as excluded.
#[derive(Debug, Clone, Copy)]
pub struct JobClassifier {
    departments: &'static [(&'static str, Department)],
    leads: &'static [&'static str],
    plan_sales: &'static [&'static str],
}

impl JobClassifier {
    pub fn new() -> Self {
        Self {
            departments: DEPARTMENT_TABLE,
            leads: LEAD_LABELS,
            plan_sales: PLAN_SALE_LABELS,
        }
    }

    /// Department for a label, `None` when the label is excluded
    pub fn department(&self, label: &str) -> Option<Department> {
        self.departments
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, department)| *department)
    }

    pub fn is_lead(&self, label: &str) -> bool {
        self.leads.iter().any(|known| *known == label)
    }

    pub fn is_plan_sale(&self, label: &str) -> bool {
        self.plan_sales.iter().any(|known| *known == label)
    }

    /// Evaluate all three predicates independently
    pub fn classify(&self, label: &str) -> Classification {
        Classification {
            department: self.department(label),
            is_lead: self.is_lead(label),
            is_plan_sale: self.is_plan_sale(label),
        }
    }

    /// Every label with a department mapping
    pub fn known_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.departments.iter().map(|(label, _)| *label)
    }
}

impl Default for JobClassifier {
    fn default() -> Self {
        Self::new()
    }
}
