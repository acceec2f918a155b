//! Weekend-observance shifts.
//!
//! When a holiday's nominal date lands on a weekend, most exchanges
//! observe it on a nearby weekday instead. The two policies here are the
//! only ones the US exchange definitions use.

use chrono::{Datelike, NaiveDate, Weekday};

/// How a holiday landing on a weekend is moved to a weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observance {
    /// Sunday moves to the following Monday; Saturday stays put.
    SundayToMonday,
    /// Saturday moves to the preceding Friday, Sunday to the following
    /// Monday.
    NearestWorkday,
}

impl Observance {
    /// Apply the shift to `date`.
    ///
    /// Returns `None` only if the shifted date would leave chrono's
    /// representable range.
    pub fn apply(&self, date: NaiveDate) -> Option<NaiveDate> {
        match (self, date.weekday()) {
            (Observance::SundayToMonday, Weekday::Sun) => date.succ_opt(),
            (Observance::NearestWorkday, Weekday::Sun) => date.succ_opt(),
            (Observance::NearestWorkday, Weekday::Sat) => date.pred_opt(),
            _ => Some(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sunday_to_monday() {
        // 2023-01-01 is a Sunday
        let sun = date(2023, 1, 1);
        assert_eq!(Observance::SundayToMonday.apply(sun), Some(date(2023, 1, 2)));
        // Saturday is untouched
        let sat = date(2022, 1, 1);
        assert_eq!(Observance::SundayToMonday.apply(sat), Some(sat));
    }

    #[test]
    fn nearest_workday() {
        // 2021-12-25 is a Saturday → observed Friday 24th
        let sat = date(2021, 12, 25);
        assert_eq!(Observance::NearestWorkday.apply(sat), Some(date(2021, 12, 24)));
        // 2022-12-25 is a Sunday → observed Monday 26th
        let sun = date(2022, 12, 25);
        assert_eq!(Observance::NearestWorkday.apply(sun), Some(date(2022, 12, 26)));
        // A Tuesday is untouched
        let tue = date(2023, 7, 4);
        assert_eq!(Observance::NearestWorkday.apply(tue), Some(tue));
    }
}
