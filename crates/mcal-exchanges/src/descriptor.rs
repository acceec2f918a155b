//! `ExchangeCalendar` — the immutable per-exchange descriptor.
//!
//! A descriptor carries no behavior beyond read-only accessors; all
//! resolution logic lives in [`crate::engine`]. Descriptors are built
//! once at catalog-construction time and never mutated, so any number of
//! threads may read them without coordination.

use chrono::{NaiveDate, NaiveTime, Weekday};
use chrono_tz::Tz;
use mcal_core::{ensure, Result};
use mcal_time::RuleCalendar;

/// Default trading weekmask: Monday through Friday.
pub const MON_TO_FRI: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Trading-calendar metadata for one exchange (or exchange family).
///
/// All accessors are pure functions of the static definition and are
/// referentially stable for the process lifetime, so engines may memoize
/// derived results keyed by descriptor identity plus year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCalendar {
    name: &'static str,
    aliases: Vec<&'static str>,
    timezone: Tz,
    open_time: NaiveTime,
    close_time: NaiveTime,
    open_day_offset: i32,
    weekmask: Vec<Weekday>,
    regular_holidays: RuleCalendar,
    adhoc_holidays: Vec<NaiveDate>,
    special_opens: Vec<(NaiveTime, RuleCalendar)>,
    special_closes: Vec<(NaiveTime, RuleCalendar)>,
}

impl ExchangeCalendar {
    /// Begin building a descriptor.
    pub fn builder(name: &'static str, timezone: Tz) -> ExchangeCalendarBuilder {
        ExchangeCalendarBuilder::new(name, timezone)
    }

    /// Exchange display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registry keys under which this descriptor is exposed.
    /// Case-sensitive; uniqueness across the catalog is enforced by the
    /// registry, not here.
    pub fn aliases(&self) -> &[&'static str] {
        &self.aliases
    }

    /// IANA timezone the open/close times are local to.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Default session-open wall-clock time in [`Self::timezone`].
    pub fn open_time_default(&self) -> NaiveTime {
        self.open_time
    }

    /// Default session-close wall-clock time in [`Self::timezone`].
    pub fn close_time_default(&self) -> NaiveTime {
        self.close_time
    }

    /// Calendar-day shift of the open relative to the nominal session
    /// date. `-1` means the session labeled "day N" opens on day N−1.
    /// Never positive in a valid descriptor.
    pub fn open_day_offset(&self) -> i32 {
        self.open_day_offset
    }

    /// Weekdays on which sessions may occur.
    pub fn weekmask(&self) -> &[Weekday] {
        &self.weekmask
    }

    /// Recurring full-holiday rules.
    pub fn regular_holidays(&self) -> &RuleCalendar {
        &self.regular_holidays
    }

    /// Explicit one-off full-holiday dates, unioned with
    /// [`Self::regular_holidays`] when resolving any date.
    pub fn adhoc_holidays(&self) -> &[NaiveDate] {
        &self.adhoc_holidays
    }

    /// Late-open rules: `(open time, rule set)` pairs, first match wins.
    pub fn special_opens(&self) -> &[(NaiveTime, RuleCalendar)] {
        &self.special_opens
    }

    /// Early-close rules: `(close time, rule set)` pairs, first match
    /// wins. A full holiday always beats a special close.
    pub fn special_closes(&self) -> &[(NaiveTime, RuleCalendar)] {
        &self.special_closes
    }

    /// Check the whole definition. Called by the registry and the engine
    /// so a bad descriptor fails at registration, not per query.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.is_empty(), "descriptor has an empty name");
        ensure!(
            !self.aliases.is_empty(),
            "descriptor '{}' has no aliases",
            self.name
        );
        for alias in &self.aliases {
            ensure!(
                !alias.is_empty(),
                "descriptor '{}' has an empty alias",
                self.name
            );
        }
        ensure!(
            self.open_day_offset <= 0,
            "descriptor '{}': open-day offset must be <= 0, got {}",
            self.name,
            self.open_day_offset
        );
        ensure!(
            !self.weekmask.is_empty(),
            "descriptor '{}': weekmask is empty",
            self.name
        );
        self.regular_holidays.validate()?;
        for (_, rules) in self.special_opens.iter().chain(&self.special_closes) {
            rules.validate()?;
        }
        Ok(())
    }
}

/// Builder for [`ExchangeCalendar`].
#[derive(Debug)]
pub struct ExchangeCalendarBuilder {
    name: &'static str,
    aliases: Vec<&'static str>,
    timezone: Tz,
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
    open_day_offset: i32,
    weekmask: Vec<Weekday>,
    regular_holidays: RuleCalendar,
    adhoc_holidays: Vec<NaiveDate>,
    special_opens: Vec<(NaiveTime, RuleCalendar)>,
    special_closes: Vec<(NaiveTime, RuleCalendar)>,
}

impl ExchangeCalendarBuilder {
    /// Start a descriptor named `name` in `timezone`.
    ///
    /// Defaults: the name itself as the only alias, a Monday–Friday
    /// weekmask, zero open-day offset, and no holiday or special-session
    /// rules. Open and close times have no default.
    pub fn new(name: &'static str, timezone: Tz) -> Self {
        Self {
            name,
            aliases: vec![name],
            timezone,
            open_time: None,
            close_time: None,
            open_day_offset: 0,
            weekmask: MON_TO_FRI.to_vec(),
            regular_holidays: RuleCalendar::default(),
            adhoc_holidays: Vec::new(),
            special_opens: Vec::new(),
            special_closes: Vec::new(),
        }
    }

    /// Replace the alias list.
    pub fn aliases(mut self, aliases: &[&'static str]) -> Self {
        self.aliases = aliases.to_vec();
        self
    }

    /// Set the default open time.
    pub fn open_time(mut self, time: NaiveTime) -> Self {
        self.open_time = Some(time);
        self
    }

    /// Set the default close time.
    pub fn close_time(mut self, time: NaiveTime) -> Self {
        self.close_time = Some(time);
        self
    }

    /// Set the open-day offset (must be `<= 0` to pass validation).
    pub fn open_day_offset(mut self, offset: i32) -> Self {
        self.open_day_offset = offset;
        self
    }

    /// Replace the trading weekmask.
    pub fn weekmask(mut self, weekdays: &[Weekday]) -> Self {
        self.weekmask = weekdays.to_vec();
        self
    }

    /// Set the recurring full-holiday rules.
    pub fn regular_holidays(mut self, rules: RuleCalendar) -> Self {
        self.regular_holidays = rules;
        self
    }

    /// Set the explicit one-off holiday dates.
    pub fn adhoc_holidays(mut self, dates: Vec<NaiveDate>) -> Self {
        self.adhoc_holidays = dates;
        self
    }

    /// Append a late-open rule set.
    pub fn special_open(mut self, time: NaiveTime, rules: RuleCalendar) -> Self {
        self.special_opens.push((time, rules));
        self
    }

    /// Append an early-close rule set.
    pub fn special_close(mut self, time: NaiveTime, rules: RuleCalendar) -> Self {
        self.special_closes.push((time, rules));
        self
    }

    /// Validate and build the descriptor.
    pub fn build(self) -> Result<ExchangeCalendar> {
        let Some(open_time) = self.open_time else {
            mcal_core::fail!("descriptor '{}': open time not set", self.name);
        };
        let Some(close_time) = self.close_time else {
            mcal_core::fail!("descriptor '{}': close time not set", self.name);
        };
        let calendar = ExchangeCalendar {
            name: self.name,
            aliases: self.aliases,
            timezone: self.timezone,
            open_time,
            close_time,
            open_day_offset: self.open_day_offset,
            weekmask: self.weekmask,
            regular_holidays: self.regular_holidays,
            adhoc_holidays: self.adhoc_holidays,
            special_opens: self.special_opens,
            special_closes: self.special_closes,
        };
        calendar.validate()?;
        Ok(calendar)
    }
}
