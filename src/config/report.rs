use crate::core::timezone::MAX_OFFSET_HOURS;
use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Tunables for the upcoming-days report
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Divisor that strips the flat regional sales tax from job totals
    pub tax_rate: Decimal,
    /// Reporting zone offset from UTC, in hours
    pub utc_offset_hours: i32,
    /// Upper bound on pages fetched per paginated listing
    pub max_pages: u32,
    /// Jobs resolved concurrently per batch
    pub job_batch_size: usize,
    /// Pause between job batches
    pub job_batch_delay_ms: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(113, 2),
            utc_offset_hours: -5,
            max_pages: 10,
            job_batch_size: 15,
            job_batch_delay_ms: 50,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let tax_rate = match env::var("REPORT_TAX_RATE") {
            Ok(raw) => Decimal::from_str(raw.trim())
                .map_err(|_| AppError::Configuration("Invalid REPORT_TAX_RATE".to_string()))?,
            Err(_) => defaults.tax_rate,
        };

        Ok(ReportConfig {
            tax_rate,
            utc_offset_hours: parse_or("REPORT_UTC_OFFSET_HOURS", defaults.utc_offset_hours)?,
            max_pages: parse_or("REPORT_MAX_PAGES", defaults.max_pages)?,
            job_batch_size: parse_or("REPORT_JOB_BATCH_SIZE", defaults.job_batch_size)?,
            job_batch_delay_ms: parse_or("REPORT_JOB_BATCH_DELAY_MS", defaults.job_batch_delay_ms)?,
        })
    }

    pub fn job_batch_delay(&self) -> Duration {
        Duration::from_millis(self.job_batch_delay_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tax_rate <= Decimal::ZERO {
            return Err(AppError::Configuration(
                "Tax rate must be greater than 0".to_string(),
            ));
        }

        if self.max_pages == 0 {
            return Err(AppError::Configuration(
                "Page limit must be greater than 0".to_string(),
            ));
        }

        if self.job_batch_size == 0 {
            return Err(AppError::Configuration(
                "Job batch size must be greater than 0".to_string(),
            ));
        }

        if self.utc_offset_hours.abs() > MAX_OFFSET_HOURS {
            return Err(AppError::Configuration(format!(
                "UTC offset must be within +/-{} hours",
                MAX_OFFSET_HOURS
            )));
        }

        Ok(())
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(default),
    }
}
