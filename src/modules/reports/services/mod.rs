mod report_assembler;
mod report_service;

pub use report_assembler::ReportAssembler;
pub use report_service::UpcomingReportService;
