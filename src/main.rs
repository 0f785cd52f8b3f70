use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http::Method, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use wtd_upcoming::config::{Config, LogFormat};
use wtd_upcoming::core::timezone::ReportClock;
use wtd_upcoming::middleware::{self, RateLimiter, RequestId};
use wtd_upcoming::modules::{health, reports};
use wtd_upcoming::reports::UpcomingReportService;
use wtd_upcoming::revenue::RevenueAllocator;
use wtd_upcoming::servicetitan::{JobBatchFetcher, SchedulingPlatform, ServiceTitanClient};

const DEFAULT_LOG_FILTER: &str = "wtd_upcoming=debug,actix_web=info";

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.app.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::OPTIONS])
        .allow_any_header()
        .max_age(3600);

    match allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors.allow_any_origin(),
    }
}

fn build_report_service(config: &Config) -> anyhow::Result<UpcomingReportService> {
    let platform: Arc<dyn SchedulingPlatform> = Arc::new(
        ServiceTitanClient::new(&config.servicetitan, config.report.max_pages)
            .context("Failed to create ServiceTitan client")?,
    );
    let fetcher = JobBatchFetcher::new(
        config.report.job_batch_size,
        config.report.job_batch_delay(),
    )?;
    let clock = ReportClock::from_offset_hours(config.report.utc_offset_hours)?;

    Ok(UpcomingReportService::new(
        platform,
        fetcher,
        RevenueAllocator::new(config.report.tax_rate),
        clock,
    ))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting WTD upcoming revenue dashboard");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let report_service = Arc::new(build_report_service(&config)?);
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)?;

    tracing::info!(
        tenant = %config.servicetitan.tenant_id,
        tax_rate = %config.report.tax_rate,
        utc_offset_hours = config.report.utc_offset_hours,
        rate_limit_per_minute = rate_limiter.requests_per_minute(),
        "Report service initialized"
    );

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let cors_origin = config.security.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(report_service.clone()))
            .wrap(rate_limiter.clone())
            .wrap(cors(cors_origin.as_deref()))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(health::configure)
            .configure(reports::configure)
            .default_service(web::to(middleware::not_found))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
