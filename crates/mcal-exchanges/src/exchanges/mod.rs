//! Per-exchange calendar definitions.
//!
//! Each leaf module exposes a single `calendar()` constructor returning
//! the exchange's [`crate::descriptor::ExchangeCalendar`]. Leaves are
//! pure data: rule lists, a timezone, clock times, and an open-day
//! offset.

/// CME Agriculture markets (grain, oilseed, livestock, dairy, lumber).
pub mod cme_agriculture;
