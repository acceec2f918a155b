//! # mcal-time
//!
//! Recurring-holiday rules and per-year rule evaluation.
//!
//! A holiday is expressed as a [`HolidayRule`]: a pure recurrence
//! (`year -> Option<date>`) plus optional observance shift, validity
//! bounds, and weekday filter. An ordered list of rules forms a
//! [`RuleCalendar`] which expands to a concrete date set for any year.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Western Easter Sunday arithmetic.
pub mod easter;

/// Weekend-observance shifts (Sunday → Monday, nearest workday).
pub mod observance;

/// Recurrence variants: fixed date, nth weekday, Easter offset, offset
/// from another recurrence.
pub mod recurrence;

/// `HolidayRule` — a named, bounded, observance-shifted recurrence.
pub mod rule;

/// `RuleCalendar` — an ordered, immutable set of holiday rules.
pub mod rule_calendar;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use easter::easter_sunday;
pub use observance::Observance;
pub use recurrence::Recurrence;
pub use rule::HolidayRule;
pub use rule_calendar::RuleCalendar;
