//! # mcal-exchanges
//!
//! Exchange calendar descriptors, the alias registry, and the
//! session-schedule engine.
//!
//! An [`ExchangeCalendar`] is pure data: timezone, default open/close
//! times, an open-day offset, and rule sets for holidays and early
//! closes. The [`CalendarEngine`] resolves a descriptor into concrete
//! per-day trading sessions; the [`CalendarRegistry`] maps alias strings
//! to shared descriptor instances.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ExchangeCalendar` descriptor and its builder.
pub mod descriptor;

/// Session resolution over a descriptor.
pub mod engine;

/// Per-exchange calendar definitions.
pub mod exchanges;

/// Shared US holiday-rule catalog.
pub mod holidays_us;

/// Alias → descriptor registry.
pub mod registry;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use descriptor::{ExchangeCalendar, ExchangeCalendarBuilder, MON_TO_FRI};
pub use engine::{CalendarEngine, Session};
pub use registry::{default_catalog, CalendarRegistry};
