pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{DayReport, ReportWindow, UpcomingReport};
pub use services::{ReportAssembler, UpcomingReportService};
