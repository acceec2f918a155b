//! # mcal
//!
//! Trading-calendar definitions and session-schedule resolution for
//! financial exchanges.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `mcal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! mcal = "0.1"
//! ```
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mcal::exchanges::{default_catalog, CalendarEngine};
//!
//! let catalog = default_catalog().unwrap();
//! let cme_ag = catalog.get("CBOT_Agriculture").unwrap();
//! let engine = CalendarEngine::new(&cme_ag).unwrap();
//!
//! // Christmas 2023: no trading session.
//! let christmas = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
//! assert!(engine.session_on(christmas).is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared macros.
pub use mcal_core as core;

/// Recurring-holiday rules and per-year evaluation.
pub use mcal_time as time;

/// Exchange descriptors, the alias registry, and the session engine.
pub use mcal_exchanges as exchanges;
