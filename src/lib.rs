//! WTD Upcoming Revenue Dashboard Library
//!
//! Builds a rolling report of today plus the next two business days from
//! ServiceTitan appointments: per-department job counts and pre-tax revenue,
//! with multi-day jobs split across the days they are worked.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::reports;
pub use modules::revenue;
pub use modules::servicetitan;
