//! # mcal-core
//!
//! Error types and shared macros for market-calendars-rs.
//!
//! Everything in this workspace is static configuration resolved at
//! catalog-construction time, so the error taxonomy is small: definition
//! bugs (`Configuration`), unknown aliases (`Lookup`), and bad caller
//! arguments. There is no retry story — none of these are transient.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
