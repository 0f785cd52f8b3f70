use serde::{Deserialize, Serialize};

/// Operational work category a job type reports under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Install,
    Service,
    Maintenance,
    Ducts,
}

impl Department {
    pub const fn ordered() -> [Self; 4] {
        [Self::Install, Self::Service, Self::Maintenance, Self::Ducts]
    }
}

/// Outcome of classifying a job-type label
///
/// `department` is `None` for excluded labels. Lead and plan-sale membership
/// are evaluated independently of the department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub department: Option<Department>,
    pub is_lead: bool,
    pub is_plan_sale: bool,
}

impl Classification {
    pub fn is_excluded(&self) -> bool {
        self.department.is_none()
    }
}
