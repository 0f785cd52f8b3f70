mod report_window;
mod upcoming_report;

pub use report_window::{day_label, ReportWindow, UPCOMING_BUSINESS_DAYS};
pub use upcoming_report::{DayReport, UpcomingReport};
