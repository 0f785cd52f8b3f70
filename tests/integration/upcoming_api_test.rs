// Integration tests for the HTTP surface: GET /api/upcoming, probes, middleware

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{test, web, App};
use helpers::*;
use rust_decimal_macros::dec;
use serde_json::Value;
use wtd_upcoming::middleware::{not_found, RateLimiter, RequestId, REQUEST_ID_HEADER};
use wtd_upcoming::modules::{health, reports};

macro_rules! init_app {
    ($platform:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(report_service(Arc::new($platform)))))
                .wrap(RateLimiter::new(100).unwrap())
                .wrap(RequestId)
                .configure(health::configure)
                .configure(reports::configure)
                .default_service(web::to(not_found)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_upcoming_report_envelope() {
    let today = chrono::Utc::now().date_naive();
    let platform = InMemoryPlatform::new()
        .with_job(1, INSTALL_HVAC, dec!(113.00))
        .with_appointment(today, 1)
        .with_appointment(today.pred_opt().unwrap(), 1)
        .with_appointment(today.succ_opt().unwrap(), 1);
    let app = init_app!(platform);

    let req = test::TestRequest::get().uri("/api/upcoming").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["timestamp"].is_string());

    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0]["isToday"], true);
    assert!(days[0]["label"].as_str().unwrap().starts_with("Today — "));
    for day in days {
        for department in ["Install", "Service", "Maintenance", "Ducts"] {
            assert!(day["departments"][department].is_object());
        }
        assert!(day["totalRevenue"].is_number());
        assert!(day["leadsRevenue"].is_number());
        assert!(day.get("planSales").is_some());
        assert!(day.get("excluded").is_some());
    }
}

#[actix_web::test]
async fn test_empty_report_omits_multi_day_jobs() {
    let app = init_app!(InMemoryPlatform::new());

    let req = test::TestRequest::get().uri("/api/upcoming").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["success"], true);
    assert!(body.get("multiDayJobs").is_none());
    assert_eq!(body["days"][0]["departments"]["Install"]["jobs"], 0);
}

#[actix_web::test]
async fn test_platform_failure_returns_error_envelope() {
    let app = init_app!(InMemoryPlatform::new().failing_appointments());

    let req = test::TestRequest::get().uri("/api/upcoming").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("appointments unavailable"));
    assert!(body.get("days").is_none());
}

#[actix_web::test]
async fn test_request_id_echoed_on_report() {
    let app = init_app!(InMemoryPlatform::new());

    let req = test::TestRequest::get()
        .uri("/api/upcoming")
        .insert_header((REQUEST_ID_HEADER, "dash-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get(REQUEST_ID_HEADER).unwrap(), "dash-42");
}

#[actix_web::test]
async fn test_probes_and_unknown_routes() {
    let app = init_app!(InMemoryPlatform::new());

    let health = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(health.status(), 200);

    let ready = test::call_service(&app, test::TestRequest::get().uri("/ready").to_request()).await;
    assert_eq!(ready.status(), 200);
    let body: Value = test::read_body_json(ready).await;
    assert_eq!(body["ready"], true);

    let missing = test::call_service(&app, test::TestRequest::get().uri("/api/nothing").to_request()).await;
    assert_eq!(missing.status(), 404);
}
