// Integration tests for batched job resolution against a scheduling platform

#[path = "../helpers/mod.rs"]
mod helpers;

use std::time::Duration;

use helpers::*;
use rust_decimal_macros::dec;
use wtd_upcoming::core::AppError;
use wtd_upcoming::servicetitan::JobBatchFetcher;

fn platform_with_jobs(count: i64) -> InMemoryPlatform {
    (1..=count).fold(InMemoryPlatform::new(), |platform, job_id| {
        platform.with_job(job_id, REPAIR, dec!(113.00))
    })
}

#[tokio::test]
async fn test_fetches_every_job_across_batches() {
    let platform = platform_with_jobs(40);
    let fetcher = JobBatchFetcher::new(15, Duration::ZERO).unwrap();
    let job_ids: Vec<i64> = (1..=40).collect();

    let jobs = fetcher.fetch(&platform, &job_ids).await.unwrap();

    assert_eq!(jobs.len(), 40);
    assert_eq!(platform.job_requests(), 40);
    assert_eq!(jobs[&17].total, dec!(113.00));
}

#[tokio::test]
async fn test_unknown_jobs_are_left_out() {
    let platform = platform_with_jobs(3);
    let fetcher = JobBatchFetcher::new(2, Duration::ZERO).unwrap();

    let jobs = fetcher.fetch(&platform, &[1, 2, 3, 99]).await.unwrap();

    assert_eq!(jobs.len(), 3);
    assert!(!jobs.contains_key(&99));
}

#[tokio::test]
async fn test_empty_request_makes_no_calls() {
    let platform = platform_with_jobs(3);
    let fetcher = JobBatchFetcher::new(15, Duration::from_millis(50)).unwrap();

    let jobs = fetcher.fetch(&platform, &[]).await.unwrap();

    assert!(jobs.is_empty());
    assert_eq!(platform.job_requests(), 0);
}

#[tokio::test]
async fn test_failure_stops_later_batches() {
    let platform = platform_with_jobs(30).failing_job(2);
    let fetcher = JobBatchFetcher::new(5, Duration::ZERO).unwrap();
    let job_ids: Vec<i64> = (1..=30).collect();

    let result = fetcher.fetch(&platform, &job_ids).await;

    assert!(matches!(result, Err(AppError::Gateway(_))));
    assert_eq!(platform.job_requests(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_pauses_between_batches() {
    let platform = platform_with_jobs(45);
    let fetcher = JobBatchFetcher::new(15, Duration::from_millis(50)).unwrap();
    let job_ids: Vec<i64> = (1..=45).collect();

    let started = tokio::time::Instant::now();
    fetcher.fetch(&platform, &job_ids).await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(100));
}
