use chrono::{Datelike, Local, NaiveDate};

const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Source of "today" for diary headers.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Returns `None` for an impossible calendar date.
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// `YYYY年MM月DD日(曜)`
pub fn format_date_header(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}年{:02}月{:02}日({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_uses_sunday_based_weekday() {
        let sunday = FixedClock::ymd(2024, 3, 3).unwrap();
        assert_eq!(format_date_header(sunday.today()), "2024年03月03日(日)");
        let saturday = FixedClock::ymd(2025, 11, 15).unwrap();
        assert_eq!(format_date_header(saturday.today()), "2025年11月15日(土)");
    }

    #[test]
    fn fixed_clock_rejects_invalid_dates() {
        assert!(FixedClock::ymd(2023, 2, 30).is_none());
    }
}
