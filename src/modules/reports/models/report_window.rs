use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Business days beyond today covered by the upcoming report
pub const UPCOMING_BUSINESS_DAYS: usize = 2;

/// Ordered days covered by one report; day 0 is "today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWindow {
    days: Vec<NaiveDate>,
}

impl ReportWindow {
    /// Today plus the next two weekdays
    pub fn three_business_days(today: NaiveDate) -> Self {
        Self::business_days(today, UPCOMING_BUSINESS_DAYS)
    }

    /// Today (even on a weekend) followed by the next `following` Monday-Friday dates
    pub fn business_days(today: NaiveDate, following: usize) -> Self {
        let mut days = Vec::with_capacity(following + 1);
        days.push(today);

        let mut current = today;
        while days.len() < following + 1 {
            current += Duration::days(1);
            if !is_weekend(current) {
                days.push(current);
            }
        }

        Self { days }
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Human-readable label, e.g. "Today — Monday, Oct 20" or "Tuesday, Oct 21"
    pub fn label(&self, index: usize) -> String {
        match self.days.get(index) {
            Some(day) => day_label(*day, index == 0),
            None => String::new(),
        }
    }
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekday plus short month and day
pub fn day_label(day: NaiveDate, is_today: bool) -> String {
    let label = day.format("%A, %b %-d").to_string();
    if is_today {
        format!("Today — {}", label)
    } else {
        label
    }
}
