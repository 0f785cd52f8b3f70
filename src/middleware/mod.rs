pub mod error_handler;
pub mod rate_limit;
pub mod request_id;

pub use error_handler::not_found;
pub use rate_limit::RateLimiter;
pub use request_id::{RequestId, REQUEST_ID_HEADER};
