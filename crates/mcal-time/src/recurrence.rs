//! Recurrence variants — the closed set of yearly-computable holiday
//! shapes.
//!
//! Each variant is a pure function of the year. Rules that cannot produce
//! a date for a given year (fifth weekday that doesn't exist, offset past
//! the representable range) yield `None` rather than an error: absence is
//! a legitimate answer at query time, while *malformed* rules are caught
//! up front by [`Recurrence::validate`].

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use mcal_core::{ensure, Result};

use crate::easter::easter_sunday;

/// A yearly-recurring date shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recurrence {
    /// The same month/day every year (e.g. Christmas, Dec 25).
    FixedDate {
        /// Month, 1–12.
        month: u32,
        /// Day of month, 1–28/30/31 depending on the month.
        day: u32,
    },
    /// The nth occurrence of a weekday within a month (e.g. Thanksgiving,
    /// 4th Thursday of November). Negative `nth` counts from the end of
    /// the month: `-1` is the last occurrence.
    NthWeekday {
        /// Month, 1–12.
        month: u32,
        /// Day of the week.
        weekday: Weekday,
        /// Occurrence index, `1..=5` or `-5..=-1`.
        nth: i8,
    },
    /// A signed day offset from Western Easter Sunday (Good Friday is
    /// `days: -2`).
    EasterOffset {
        /// Offset in days from Easter Sunday.
        days: i64,
    },
    /// A signed day offset from another recurrence (Black Friday is
    /// Thanksgiving `+ 1`).
    Offset {
        /// The recurrence the offset is anchored to.
        base: Box<Recurrence>,
        /// Offset in days from the base date.
        days: i64,
    },
}

impl Recurrence {
    /// Resolve the recurrence for `year`, before any observance shift.
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        match self {
            Recurrence::FixedDate { month, day } => {
                NaiveDate::from_ymd_opt(year, *month, *day)
            }
            Recurrence::NthWeekday { month, weekday, nth } => {
                nth_weekday_of_month(year, *month, *weekday, *nth)
            }
            Recurrence::EasterOffset { days } => shift(easter_sunday(year)?, *days),
            Recurrence::Offset { base, days } => shift(base.resolve(year)?, *days),
        }
    }

    /// Check that the recurrence is well-formed.
    ///
    /// Feb 29 is rejected as a fixed date: a recurring rule must resolve
    /// in every year of its validity window, and Feb 29 would silently
    /// skip non-leap years.
    pub fn validate(&self) -> Result<()> {
        match self {
            Recurrence::FixedDate { month, day } => {
                ensure!(
                    (1..=12).contains(month),
                    "month {month} out of range [1, 12]"
                );
                let max = max_recurring_day(*month);
                ensure!(
                    (1..=max).contains(day),
                    "day {day} out of range [1, {max}] for month {month}"
                );
                Ok(())
            }
            Recurrence::NthWeekday { month, nth, .. } => {
                ensure!(
                    (1..=12).contains(month),
                    "month {month} out of range [1, 12]"
                );
                ensure!(
                    (1..=5).contains(&nth.unsigned_abs()),
                    "nth-weekday index {nth} out of range (expected 1..=5 or -5..=-1)"
                );
                Ok(())
            }
            Recurrence::EasterOffset { days } => {
                ensure!(
                    days.abs() <= 366,
                    "Easter offset of {days} days leaves the anchor year"
                );
                Ok(())
            }
            Recurrence::Offset { base, days } => {
                ensure!(
                    days.abs() <= 366,
                    "rule offset of {days} days leaves the anchor year"
                );
                base.validate()
            }
        }
    }
}

/// Largest day-of-month a *recurring* fixed-date rule may use.
fn max_recurring_day(month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => 28, // February: Feb 29 is not valid every year
    }
}

/// Shift `date` by a signed number of days.
fn shift(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

/// Last calendar day of `(year, month)`.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(1))?
        .pred_opt()
}

/// The nth `weekday` of `(year, month)`; negative `nth` counts backward
/// from the end of the month.
fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: i8) -> Option<NaiveDate> {
    if nth > 0 {
        NaiveDate::from_weekday_of_month_opt(year, month, weekday, nth as u8)
    } else {
        let last = last_day_of_month(year, month)?;
        let back = (last.weekday().num_days_from_monday() + 7
            - weekday.num_days_from_monday())
            % 7;
        let candidate = last
            .checked_sub_days(Days::new(back as u64))?
            .checked_sub_days(Days::new(7 * (nth.unsigned_abs() as u64 - 1)))?;
        (candidate.month() == month).then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fixed_date() {
        let christmas = Recurrence::FixedDate { month: 12, day: 25 };
        assert_eq!(christmas.resolve(2023), Some(date(2023, 12, 25)));
    }

    #[test]
    fn nth_weekday_forward() {
        // Thanksgiving: 4th Thursday of November
        let rule = Recurrence::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            nth: 4,
        };
        assert_eq!(rule.resolve(2023), Some(date(2023, 11, 23)));
        assert_eq!(rule.resolve(2024), Some(date(2024, 11, 28)));
    }

    #[test]
    fn nth_weekday_backward() {
        // Memorial Day: last Monday of May
        let rule = Recurrence::NthWeekday {
            month: 5,
            weekday: Weekday::Mon,
            nth: -1,
        };
        assert_eq!(rule.resolve(2023), Some(date(2023, 5, 29)));
        assert_eq!(rule.resolve(2024), Some(date(2024, 5, 27)));
    }

    #[test]
    fn fifth_weekday_can_be_absent() {
        // November 2023 has five Wednesdays but only four Fridays.
        let fifth_wed = Recurrence::NthWeekday {
            month: 11,
            weekday: Weekday::Wed,
            nth: 5,
        };
        let fifth_fri = Recurrence::NthWeekday {
            month: 11,
            weekday: Weekday::Fri,
            nth: 5,
        };
        assert_eq!(fifth_wed.resolve(2023), Some(date(2023, 11, 29)));
        assert_eq!(fifth_fri.resolve(2023), None);
    }

    #[test]
    fn easter_offset() {
        // Good Friday 2023: Easter (Apr 9) − 2
        let good_friday = Recurrence::EasterOffset { days: -2 };
        assert_eq!(good_friday.resolve(2023), Some(date(2023, 4, 7)));
    }

    #[test]
    fn offset_from_rule() {
        // Black Friday: Thanksgiving + 1
        let rule = Recurrence::Offset {
            base: Box::new(Recurrence::NthWeekday {
                month: 11,
                weekday: Weekday::Thu,
                nth: 4,
            }),
            days: 1,
        };
        assert_eq!(rule.resolve(2023), Some(date(2023, 11, 24)));
    }

    #[test]
    fn validate_rejects_feb_29() {
        let rule = Recurrence::FixedDate { month: 2, day: 29 };
        assert!(rule.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_nth() {
        let rule = Recurrence::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            nth: 0,
        };
        assert!(rule.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_month() {
        let rule = Recurrence::FixedDate { month: 13, day: 1 };
        assert!(rule.validate().is_err());
    }
}
