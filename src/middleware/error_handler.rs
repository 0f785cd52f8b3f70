use actix_web::{HttpRequest, HttpResponse, ResponseError};

use crate::core::AppError;

/// Default service for unmatched routes, rendered in the standard error envelope
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::debug!(method = %req.method(), path = %req.path(), "No route matched");
    AppError::not_found(format!("No route for {} {}", req.method(), req.path())).error_response()
}
