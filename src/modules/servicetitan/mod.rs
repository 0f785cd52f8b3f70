pub mod models;
pub mod services;

pub use services::{
    JobBatchFetcher, SchedulingPlatform, ServiceTitanAuth, ServiceTitanClient, TokenCache,
};
