pub mod auth;
pub mod client;
pub mod job_fetcher;
pub mod platform;

pub use auth::{CachedToken, ServiceTitanAuth, TokenCache};
pub use client::ServiceTitanClient;
pub use job_fetcher::JobBatchFetcher;
pub use platform::SchedulingPlatform;
