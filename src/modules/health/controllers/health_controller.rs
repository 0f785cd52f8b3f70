use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::core::timezone::format_iso8601;
use crate::modules::reports::services::UpcomingReportService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub report_service: bool,
    pub application: bool,
}

/// GET /health - Liveness probe
/// Does not contact the scheduling platform
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        timestamp: format_iso8601(chrono::Utc::now()),
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness probe
/// Ready once the report service has been registered with the app
pub async fn readiness_check(
    service: Option<web::Data<Arc<UpcomingReportService>>>,
) -> impl Responder {
    let checks = ReadinessChecks {
        report_service: service.is_some(),
        application: true,
    };
    let ready = checks.report_service && checks.application;

    if !ready {
        tracing::warn!("Readiness check failed: report service not registered");
    }

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
