mod report_controller;

pub use report_controller::{configure, get_upcoming_report, UpcomingReportResponse};
