use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::core::Result;
use crate::modules::reports::models::UpcomingReport;
use crate::modules::reports::services::UpcomingReportService;

/// Success envelope for the upcoming report
#[derive(Debug, Serialize)]
pub struct UpcomingReportResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: UpcomingReport,
}

impl From<UpcomingReport> for UpcomingReportResponse {
    fn from(report: UpcomingReport) -> Self {
        Self {
            success: true,
            report,
        }
    }
}

/// GET /api/upcoming
///
/// Returns today and the next two business days with per-department job
/// counts and pre-tax revenue. Platform failures render as
/// `{"success": false, "error": ...}`.
pub async fn get_upcoming_report(
    service: web::Data<Arc<UpcomingReportService>>,
) -> Result<HttpResponse> {
    let report = service.generate().await.map_err(|e| {
        error!("Failed to generate upcoming report: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(UpcomingReportResponse::from(report)))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").route("/upcoming", web::get().to(get_upcoming_report)));
}
