pub mod appointment_tally;
pub mod day_aggregator;
pub mod job_classifier;
pub mod revenue_allocator;

pub use appointment_tally::AppointmentTally;
pub use day_aggregator::{DayAggregate, DayAggregator, WindowAggregate};
pub use job_classifier::JobClassifier;
pub use revenue_allocator::{DayAllocation, RevenueAllocator};
