//! `RuleCalendar` — an ordered, immutable set of holiday rules expanded
//! per calendar year.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use mcal_core::Result;

use crate::rule::HolidayRule;

/// An ordered list of [`HolidayRule`]s evaluated per calendar year.
///
/// Expansion is deterministic: the same year always yields the same set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleCalendar {
    rules: Vec<HolidayRule>,
}

impl RuleCalendar {
    /// Build a calendar from an ordered list of rules.
    pub fn new(rules: Vec<HolidayRule>) -> Self {
        Self { rules }
    }

    /// The rules, in definition order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// `true` if the calendar holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Expand every rule for `year`.
    ///
    /// Observance shifts may move a date into an adjacent calendar year
    /// (a Saturday Jan 1 observed on the preceding Dec 31); such dates
    /// are included in the expansion of the *query* year.
    pub fn dates_in_year(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.rules
            .iter()
            .filter_map(|rule| rule.observed_in(year))
            .collect()
    }

    /// `true` if `date` is produced by any rule.
    ///
    /// Checks the expansions of the surrounding years as well, so dates
    /// shifted across a year boundary by an observance are still found.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let year = date.year();
        (year - 1..=year + 1).any(|y| {
            self.rules
                .iter()
                .any(|rule| rule.observed_in(y) == Some(date))
        })
    }

    /// Validate every rule.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.rules {
            rule.validate()?;
        }
        Ok(())
    }
}
