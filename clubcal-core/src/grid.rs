//! Month grid layout: weeks of seven days, Monday first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::month::MonthCursor;

const DAYS_PER_WEEK: usize = 7;
const MAX_WEEKS: usize = 6;

/// What to show in cells before the 1st and after the last day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FillerPolicy {
    /// Leave them blank
    #[default]
    Empty,
    /// Show the neighbouring month's day numbers, dimmed
    Adjacent,
}

impl FromStr for FillerPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" => Ok(FillerPolicy::Empty),
            "adjacent" => Ok(FillerPolicy::Adjacent),
            other => Err(format!(
                "Unknown filler policy '{}'. Expected 'empty' or 'adjacent'",
                other
            )),
        }
    }
}

impl TryFrom<String> for FillerPolicy {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FillerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillerPolicy::Empty => f.write_str("empty"),
            FillerPolicy::Adjacent => f.write_str("adjacent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// A day of the displayed month
    Day(u32),
    /// Outside the month; carries the neighbouring day number under
    /// [`FillerPolicy::Adjacent`]
    Filler { day: Option<u32> },
}

pub type Week = [GridCell; DAYS_PER_WEEK];

/// Layout of one month.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    cursor: MonthCursor,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lay the month out row by row, stopping after the row holding the
    /// last day.
    pub fn build(cursor: MonthCursor, policy: FillerPolicy) -> Self {
        let start = cursor.first_weekday() as usize;
        let days_in_month = cursor.days_in_month();
        let days_in_prev_month = cursor
            .shifted(-1)
            .map(|prev| prev.days_in_month())
            .unwrap_or(31);

        let filler = |day: u32| GridCell::Filler {
            day: match policy {
                FillerPolicy::Empty => None,
                FillerPolicy::Adjacent => Some(day),
            },
        };

        let mut weeks = Vec::with_capacity(MAX_WEEKS);
        let mut date = 1;
        let mut next_month_date = 1;

        for week in 0..MAX_WEEKS {
            let mut row = [GridCell::Filler { day: None }; DAYS_PER_WEEK];

            for (col, cell) in row.iter_mut().enumerate() {
                *cell = if week == 0 && col < start {
                    filler(days_in_prev_month - (start - col) as u32 + 1)
                } else if date > days_in_month {
                    let day = next_month_date;
                    next_month_date += 1;
                    filler(day)
                } else {
                    let day = date;
                    date += 1;
                    GridCell::Day(day)
                };
            }

            weeks.push(row);

            if date > days_in_month {
                break;
            }
        }

        MonthGrid { cursor, weeks }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Filler cells before the 1st.
    pub fn leading_fillers(&self) -> usize {
        self.weeks
            .first()
            .map(|week| {
                week.iter()
                    .take_while(|cell| matches!(cell, GridCell::Filler { .. }))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Day numbers of the month in grid order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.iter().flatten().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(*day),
            GridCell::Filler { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(year: i32, month: u32, policy: FillerPolicy) -> MonthGrid {
        MonthGrid::build(MonthCursor::new(year, month).unwrap(), policy)
    }

    #[test]
    fn january_2024_starts_on_monday_and_needs_five_weeks() {
        let grid = grid(2024, 0, FillerPolicy::Empty);

        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.leading_fillers(), 0);
        assert_eq!(grid.days().count(), 31);
        assert_eq!(grid.weeks()[0][0], GridCell::Day(1));
    }

    #[test]
    fn february_2024_has_three_leading_fillers() {
        let grid = grid(2024, 1, FillerPolicy::Empty);

        assert_eq!(grid.weeks().len(), 5);
        assert_eq!(grid.leading_fillers(), 3);
        assert_eq!(grid.days().count(), 29);
        assert_eq!(grid.weeks()[0][3], GridCell::Day(1));
        assert_eq!(grid.weeks()[4][3], GridCell::Day(29));
        assert_eq!(grid.weeks()[4][4], GridCell::Filler { day: None });
    }

    #[test]
    fn adjacent_policy_numbers_neighbouring_days() {
        let grid = grid(2024, 1, FillerPolicy::Adjacent);
        let first = grid.weeks()[0];
        let last = grid.weeks()[4];

        assert_eq!(first[0], GridCell::Filler { day: Some(29) });
        assert_eq!(first[2], GridCell::Filler { day: Some(31) });
        assert_eq!(last[4], GridCell::Filler { day: Some(1) });
        assert_eq!(last[6], GridCell::Filler { day: Some(3) });
    }

    #[test]
    fn adjacent_policy_uses_december_before_january() {
        // 2025-01-01 is a Wednesday
        let grid = grid(2025, 0, FillerPolicy::Adjacent);
        assert_eq!(grid.weeks()[0][0], GridCell::Filler { day: Some(30) });
        assert_eq!(grid.weeks()[0][1], GridCell::Filler { day: Some(31) });
    }

    #[test]
    fn stops_after_the_row_holding_the_last_day() {
        // February 2021: Monday the 1st, 28 days
        assert_eq!(grid(2021, 1, FillerPolicy::Empty).weeks().len(), 4);
        // September 2024: Sunday the 1st, 30 days
        assert_eq!(grid(2024, 8, FillerPolicy::Empty).weeks().len(), 6);
    }

    #[test]
    fn filler_policy_parses_case_insensitively() {
        assert_eq!("Adjacent".parse::<FillerPolicy>(), Ok(FillerPolicy::Adjacent));
        assert_eq!("empty".parse::<FillerPolicy>(), Ok(FillerPolicy::Empty));
        assert!("dimmed".parse::<FillerPolicy>().is_err());
    }
}
