pub mod health;
pub mod reports;
pub mod revenue;
pub mod servicetitan;
