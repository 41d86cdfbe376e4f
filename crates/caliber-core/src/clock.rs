use chrono::{Local, NaiveDate};

/// Source of creation timestamps for new reviews.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// The current calendar date in the host's local time zone.
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub millis: i64,
    pub date: NaiveDate,
}

impl FixedClock {
    pub fn new(millis: i64, date: NaiveDate) -> Self {
        Self { millis, date }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Format a date as "Month D, YYYY" with the English month name spelled out.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_display_date(date), "January 5, 2025");

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_display_date(date), "December 25, 2024");
    }

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let clock = FixedClock::new(1_000, date);
        assert_eq!(clock.now_millis(), 1_000);
        assert_eq!(clock.today(), date);
    }
}
