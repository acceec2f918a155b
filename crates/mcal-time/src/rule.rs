//! `HolidayRule` — a named recurrence with observance shift, validity
//! bounds, and an optional weekday filter.

use chrono::{Datelike, NaiveDate, Weekday};
use mcal_core::{ensure, Result};

use crate::observance::Observance;
use crate::recurrence::Recurrence;

/// A single recurring-holiday definition.
///
/// Evaluation order for a query year: validity bounds → recurrence →
/// weekday filter → observance shift. The weekday filter applies to the
/// *nominal* date, before any observance shift; the validity bounds apply
/// to the query year, so an observed date may legitimately fall in an
/// adjacent calendar year (e.g. a Saturday Jan 1 observed on Dec 31).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRule {
    name: String,
    recurrence: Recurrence,
    observance: Option<Observance>,
    first_year: Option<i32>,
    last_year: Option<i32>,
    only_on: Option<Vec<Weekday>>,
}

impl HolidayRule {
    /// Create a rule with no observance shift, bounds, or weekday filter.
    pub fn new(name: impl Into<String>, recurrence: Recurrence) -> Self {
        Self {
            name: name.into(),
            recurrence,
            observance: None,
            first_year: None,
            last_year: None,
            only_on: None,
        }
    }

    /// Attach a weekend-observance shift.
    pub fn observed(mut self, observance: Observance) -> Self {
        self.observance = Some(observance);
        self
    }

    /// Restrict the rule to years `>= year` (inclusive).
    pub fn from_year(mut self, year: i32) -> Self {
        self.first_year = Some(year);
        self
    }

    /// Restrict the rule to years `<= year` (inclusive).
    pub fn until_year(mut self, year: i32) -> Self {
        self.last_year = Some(year);
        self
    }

    /// Only observe the holiday when its nominal date falls on one of the
    /// given weekdays.
    pub fn only_on(mut self, weekdays: &[Weekday]) -> Self {
        self.only_on = Some(weekdays.to_vec());
        self
    }

    /// The rule's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying recurrence.
    pub fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    /// Resolve the observed holiday date for `year`, or `None` when the
    /// rule does not apply that year.
    pub fn observed_in(&self, year: i32) -> Option<NaiveDate> {
        if self.first_year.is_some_and(|first| year < first)
            || self.last_year.is_some_and(|last| year > last)
        {
            return None;
        }
        let nominal = self.recurrence.resolve(year)?;
        if let Some(days) = &self.only_on {
            if !days.contains(&nominal.weekday()) {
                return None;
            }
        }
        match self.observance {
            Some(observance) => observance.apply(nominal),
            None => Some(nominal),
        }
    }

    /// Check that the rule is well-formed.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.name.is_empty(), "holiday rule has an empty name");
        self.recurrence.validate()?;
        if let (Some(first), Some(last)) = (self.first_year, self.last_year) {
            ensure!(
                first <= last,
                "rule '{}': first year {first} is after last year {last}",
                self.name
            );
        }
        if let Some(days) = &self.only_on {
            ensure!(
                !days.is_empty(),
                "rule '{}': weekday filter is empty",
                self.name
            );
        }
        Ok(())
    }
}
