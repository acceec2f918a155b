//! Session resolution over an [`ExchangeCalendar`].
//!
//! For a queried date D the engine evaluates, in order:
//! (a) D outside the weekmask or a full holiday (union of ad-hoc dates
//! and the regular-holiday expansion) — no session;
//! (b) D matching a special-open or special-close rule set — session
//! with the paired time substituted;
//! (c) otherwise — session from the default open to the default close,
//! with the open shifted by the open-day offset.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use mcal_core::{Error, Result};

use crate::descriptor::ExchangeCalendar;

/// One concrete trading session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Nominal session date.
    pub date: NaiveDate,
    /// Session open, localized to the exchange timezone. May fall on an
    /// earlier calendar day than `date` when the open-day offset is
    /// negative.
    pub open: DateTime<Tz>,
    /// Session close, localized to the exchange timezone.
    pub close: DateTime<Tz>,
}

/// Resolves an [`ExchangeCalendar`] into concrete sessions.
///
/// Holiday expansions are memoized per calendar year; this is sound
/// because descriptor accessors are referentially stable for the process
/// lifetime.
#[derive(Debug)]
pub struct CalendarEngine<'a> {
    calendar: &'a ExchangeCalendar,
    full_holidays: RwLock<HashMap<i32, Arc<BTreeSet<NaiveDate>>>>,
}

impl<'a> CalendarEngine<'a> {
    /// Create an engine over `calendar`.
    ///
    /// The descriptor is validated here, so a positive open-day offset or
    /// a malformed rule fails fast instead of surfacing per query.
    pub fn new(calendar: &'a ExchangeCalendar) -> Result<Self> {
        calendar.validate()?;
        Ok(Self {
            calendar,
            full_holidays: RwLock::new(HashMap::new()),
        })
    }

    /// The descriptor this engine resolves.
    pub fn calendar(&self) -> &ExchangeCalendar {
        self.calendar
    }

    /// All full-holiday dates falling in `year`: the regular-rule
    /// expansion (including observance shifts from adjacent years)
    /// unioned with the ad-hoc dates.
    pub fn full_holidays_in(&self, year: i32) -> Arc<BTreeSet<NaiveDate>> {
        if let Some(cached) = self
            .full_holidays
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&year)
        {
            return Arc::clone(cached);
        }
        let expanded = Arc::new(self.expand_year(year));
        self.full_holidays
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(year)
            .or_insert(expanded)
            .clone()
    }

    fn expand_year(&self, year: i32) -> BTreeSet<NaiveDate> {
        let regular = self.calendar.regular_holidays();
        // Observance shifts can move a rule's date across a year
        // boundary, so the adjacent years' expansions are scanned too.
        let mut dates: BTreeSet<NaiveDate> = (year - 1..=year + 1)
            .flat_map(|y| regular.dates_in_year(y))
            .filter(|d| d.year() == year)
            .collect();
        dates.extend(
            self.calendar
                .adhoc_holidays()
                .iter()
                .filter(|d| d.year() == year),
        );
        dates
    }

    /// `true` if `date` is a full non-trading day by holiday designation
    /// (weekmask not considered).
    pub fn is_full_holiday(&self, date: NaiveDate) -> bool {
        self.full_holidays_in(date.year()).contains(&date)
    }

    /// Resolve the session for `date`, or `None` on a non-trading day.
    pub fn session_on(&self, date: NaiveDate) -> Option<Session> {
        if !self.calendar.weekmask().contains(&date.weekday()) {
            return None;
        }
        if self.is_full_holiday(date) {
            return None;
        }

        let open_date = shift_days(date, self.calendar.open_day_offset())?;
        let open_time = self
            .matching_time(self.calendar.special_opens(), date)
            .unwrap_or_else(|| self.calendar.open_time_default());
        let close_time = self
            .matching_time(self.calendar.special_closes(), date)
            .unwrap_or_else(|| self.calendar.close_time_default());

        let tz = self.calendar.timezone();
        Some(Session {
            date,
            open: localize(tz, open_date, open_time)?,
            close: localize(tz, date, close_time)?,
        })
    }

    /// First matching `(time, rule set)` pair for `date`, if any.
    fn matching_time(
        &self,
        pairs: &[(NaiveTime, mcal_time::RuleCalendar)],
        date: NaiveDate,
    ) -> Option<NaiveTime> {
        pairs
            .iter()
            .find(|(_, rules)| rules.contains(date))
            .map(|(time, _)| *time)
    }

    /// All sessions with nominal dates in `[first, last]`, ascending.
    pub fn schedule(&self, first: NaiveDate, last: NaiveDate) -> Result<Vec<Session>> {
        if first > last {
            return Err(Error::InvalidArgument(format!(
                "schedule range start {first} is after end {last}"
            )));
        }
        Ok(first
            .iter_days()
            .take_while(|d| *d <= last)
            .filter_map(|d| self.session_on(d))
            .collect())
    }

    /// Full-holiday dates in `[first, last]` that fall on weekmask days
    /// (a holiday on a weekend is not reported — it removes no session).
    pub fn holidays_in_range(&self, first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
        first
            .iter_days()
            .take_while(|d| *d <= last)
            .filter(|d| {
                self.calendar.weekmask().contains(&d.weekday()) && self.is_full_holiday(*d)
            })
            .collect()
    }
}

fn shift_days(date: NaiveDate, days: i32) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs() as u64))
    }
}

/// Attach `time` on `date` to `tz`. Ambiguous local times (DST fall-back)
/// take the earliest mapping; local times inside a spring-forward gap are
/// pushed one hour later.
fn localize(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) => Some(t),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => tz
            .from_local_datetime(&naive.checked_add_signed(Duration::hours(1))?)
            .earliest(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ExchangeCalendar;
    use chrono_tz::America::Chicago;
    use mcal_time::{HolidayRule, Recurrence, RuleCalendar};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// A synthetic exchange: fixed holiday on Jul 4, early close 13:00 on
    /// Jul 3, ad-hoc holiday on 2023-06-15, open overnight from the prior
    /// day.
    fn synthetic() -> ExchangeCalendar {
        ExchangeCalendar::builder("SYN", Chicago)
            .open_time(time(17, 0))
            .close_time(time(16, 0))
            .open_day_offset(-1)
            .regular_holidays(RuleCalendar::new(vec![HolidayRule::new(
                "Independence Day",
                Recurrence::FixedDate { month: 7, day: 4 },
            )]))
            .adhoc_holidays(vec![date(2023, 6, 15)])
            .special_close(
                time(13, 0),
                RuleCalendar::new(vec![HolidayRule::new(
                    "Day before Independence Day",
                    Recurrence::FixedDate { month: 7, day: 3 },
                )]),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn weekend_has_no_session() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        // 2023-06-17 is a Saturday
        assert_eq!(engine.session_on(date(2023, 6, 17)), None);
    }

    #[test]
    fn regular_holiday_has_no_session() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        // 2023-07-04 is a Tuesday
        assert_eq!(engine.session_on(date(2023, 7, 4)), None);
    }

    #[test]
    fn adhoc_holiday_has_no_session() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        // 2023-06-15 is a Thursday
        assert_eq!(engine.session_on(date(2023, 6, 15)), None);
    }

    #[test]
    fn open_day_offset_shifts_open() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        // 2023-06-14 is a Wednesday
        let session = engine.session_on(date(2023, 6, 14)).unwrap();
        assert_eq!(
            session.open,
            Chicago.with_ymd_and_hms(2023, 6, 13, 17, 0, 0).unwrap()
        );
        assert_eq!(
            session.close,
            Chicago.with_ymd_and_hms(2023, 6, 14, 16, 0, 0).unwrap()
        );
    }

    #[test]
    fn special_close_shortens_session() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        // 2023-07-03 is a Monday
        let session = engine.session_on(date(2023, 7, 3)).unwrap();
        assert_eq!(
            session.close,
            Chicago.with_ymd_and_hms(2023, 7, 3, 13, 0, 0).unwrap()
        );
        // The open is unchanged by a special close.
        assert_eq!(
            session.open,
            Chicago.with_ymd_and_hms(2023, 7, 2, 17, 0, 0).unwrap()
        );
    }

    #[test]
    fn full_holiday_beats_special_close() {
        // Early-close rule on the same date as an ad-hoc holiday: the
        // holiday wins and there is no session at all.
        let cal = ExchangeCalendar::builder("SYN2", Chicago)
            .open_time(time(8, 30))
            .close_time(time(15, 0))
            .adhoc_holidays(vec![date(2023, 11, 24)])
            .special_close(
                time(12, 0),
                RuleCalendar::new(vec![HolidayRule::new(
                    "Post-Thanksgiving",
                    Recurrence::Offset {
                        base: Box::new(Recurrence::NthWeekday {
                            month: 11,
                            weekday: chrono::Weekday::Thu,
                            nth: 4,
                        }),
                        days: 1,
                    },
                )]),
            )
            .build()
            .unwrap();
        let engine = CalendarEngine::new(&cal).unwrap();
        assert_eq!(engine.session_on(date(2023, 11, 24)), None);
    }

    #[test]
    fn schedule_rejects_inverted_range() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        assert!(engine
            .schedule(date(2023, 7, 4), date(2023, 7, 1))
            .is_err());
    }

    #[test]
    fn schedule_skips_non_trading_days() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        // Mon Jul 3 (early close), Tue Jul 4 (holiday), Wed–Fri normal,
        // Sat/Sun skipped.
        let sessions = engine
            .schedule(date(2023, 7, 3), date(2023, 7, 9))
            .unwrap();
        let dates: Vec<NaiveDate> = sessions.iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![date(2023, 7, 3), date(2023, 7, 5), date(2023, 7, 6), date(2023, 7, 7)]
        );
    }

    #[test]
    fn holidays_in_range_excludes_weekends() {
        // Jul 4 2021 is a Sunday; the weekmask already removes it.
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        assert_eq!(
            engine.holidays_in_range(date(2021, 7, 1), date(2021, 7, 31)),
            Vec::<NaiveDate>::new()
        );
        assert_eq!(
            engine.holidays_in_range(date(2023, 7, 1), date(2023, 7, 31)),
            vec![date(2023, 7, 4)]
        );
    }

    #[test]
    fn year_cache_is_stable() {
        let cal = synthetic();
        let engine = CalendarEngine::new(&cal).unwrap();
        let first = engine.full_holidays_in(2023);
        let second = engine.full_holidays_in(2023);
        assert!(Arc::ptr_eq(&first, &second));
    }
}
