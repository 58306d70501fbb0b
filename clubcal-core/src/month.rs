//! The displayed month and the date arithmetic behind it.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{ClubcalError, ClubcalResult};

/// Month names shown in the calendar title.
pub const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Currently displayed (year, month). `month` is zero-based: January = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> ClubcalResult<Self> {
        if month > 11 {
            return Err(ClubcalError::InvalidMonth(month));
        }
        // Both ends of the month must be representable
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none()
            || NaiveDate::from_ymd_opt(year, 12, 31).is_none()
        {
            return Err(ClubcalError::InvalidYear(year));
        }
        Ok(MonthCursor { year, month })
    }

    /// The month containing today's local date.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        MonthCursor {
            year: today.year(),
            month: today.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    /// Title text, e.g. "Mars 2024".
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    /// Move by `direction` months, rolling the year over at December/January.
    ///
    /// Returns an error only when the resulting year leaves chrono's range.
    pub fn shifted(&self, direction: i32) -> ClubcalResult<Self> {
        let total = self.year as i64 * 12 + self.month as i64 + direction as i64;
        let year = total.div_euclid(12);
        let month = total.rem_euclid(12) as u32;
        let year = i32::try_from(year).map_err(|_| ClubcalError::InvalidYear(self.year))?;
        MonthCursor::new(year, month)
    }

    pub fn first_day(&self) -> NaiveDate {
        // Validated in `new`
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Number of days in the month (the "day 0 of next month" rule).
    pub fn days_in_month(&self) -> u32 {
        let next_first = if self.month == 11 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 2, 1)
        };
        next_first
            .and_then(|d| d.pred_opt())
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Weekday of the 1st, Monday = 0 … Sunday = 6.
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_monday()
    }

    /// `YYYY-MM-DD` key used to look events up for `day` of this month.
    pub fn date_key(&self, day: u32) -> String {
        date_key(self.year, self.month, day)
    }
}

/// `YYYY-MM-DD` key for a zero-based month.
pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month + 1, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(year: i32, month: u32) -> MonthCursor {
        MonthCursor::new(year, month).unwrap()
    }

    #[test]
    fn rejects_out_of_range_months() {
        assert!(matches!(
            MonthCursor::new(2024, 12),
            Err(ClubcalError::InvalidMonth(12))
        ));
    }

    #[test]
    fn december_rolls_forward_into_january() {
        let next = cursor(2024, 11).shifted(1).unwrap();
        assert_eq!((next.year(), next.month()), (2025, 0));
    }

    #[test]
    fn january_rolls_back_into_december() {
        let prev = cursor(2024, 0).shifted(-1).unwrap();
        assert_eq!((prev.year(), prev.month()), (2023, 11));
    }

    #[test]
    fn shifting_within_a_year_keeps_the_year() {
        let next = cursor(2024, 4).shifted(1).unwrap();
        assert_eq!((next.year(), next.month()), (2024, 5));
    }

    #[test]
    fn counts_days_including_leap_years() {
        assert_eq!(cursor(2024, 1).days_in_month(), 29);
        assert_eq!(cursor(2023, 1).days_in_month(), 28);
        assert_eq!(cursor(1900, 1).days_in_month(), 28);
        assert_eq!(cursor(2000, 1).days_in_month(), 29);
        assert_eq!(cursor(2024, 0).days_in_month(), 31);
        assert_eq!(cursor(2024, 3).days_in_month(), 30);
        assert_eq!(cursor(2024, 11).days_in_month(), 31);
    }

    #[test]
    fn first_weekday_is_monday_based() {
        // 2024-01-01 is a Monday, 2024-02-01 a Thursday, 2024-09-01 a Sunday
        assert_eq!(cursor(2024, 0).first_weekday(), 0);
        assert_eq!(cursor(2024, 1).first_weekday(), 3);
        assert_eq!(cursor(2024, 8).first_weekday(), 6);
    }

    #[test]
    fn title_and_keys_use_one_based_months() {
        let march = cursor(2024, 2);
        assert_eq!(march.title(), "Mars 2024");
        assert_eq!(march.date_key(5), "2024-03-05");
        assert_eq!(date_key(2024, 11, 31), "2024-12-31");
    }
}
