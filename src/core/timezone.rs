use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::core::{AppError, Result};

/// Largest UTC offset accepted for the reporting zone, in hours
pub const MAX_OFFSET_HOURS: i32 = 14;

/// Converts platform (UTC) instants into the reporting zone
///
/// The reporting zone is a fixed offset from UTC; daylight saving is not applied.
#[derive(Debug, Clone, Copy)]
pub struct ReportClock {
    offset: FixedOffset,
}

impl ReportClock {
    /// Create a clock for a whole-hour offset from UTC (e.g. -5 for EST)
    pub fn from_offset_hours(hours: i32) -> Result<Self> {
        if hours.abs() > MAX_OFFSET_HOURS {
            return Err(AppError::configuration(format!(
                "UTC offset must be within +/-{} hours, got {}",
                MAX_OFFSET_HOURS, hours
            )));
        }

        let offset = FixedOffset::east_opt(hours * 3600)
            .ok_or_else(|| AppError::configuration(format!("Invalid UTC offset: {}", hours)))?;

        Ok(Self { offset })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Convert a UTC timestamp to the reporting zone
    pub fn to_local(&self, utc_time: DateTime<Utc>) -> DateTime<FixedOffset> {
        utc_time.with_timezone(&self.offset)
    }

    /// Calendar date in the reporting zone for a UTC instant
    pub fn local_date(&self, utc_time: DateTime<Utc>) -> NaiveDate {
        self.to_local(utc_time).date_naive()
    }

    /// Today's date in the reporting zone
    pub fn today(&self) -> NaiveDate {
        self.local_date(Utc::now())
    }
}

/// Format timestamp as ISO 8601 UTC for API responses
pub fn format_iso8601(utc_time: DateTime<Utc>) -> String {
    utc_time.to_rfc3339()
}

/// Format a date as YYYY-MM-DD, the form the platform's query parameters expect
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
