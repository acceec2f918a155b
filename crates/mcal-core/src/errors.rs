//! Error types for market-calendars-rs.
//!
//! A single `thiserror`-derived enum covers the whole workspace. Calendar
//! definitions are static data, so every error here is either a definition
//! bug caught at registration time or a caller bug caught at query time.

use thiserror::Error;

/// The top-level error type used throughout market-calendars-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid calendar definition: malformed recurrence rule, positive
    /// open-day offset, duplicate alias, and the like. Detected when a
    /// descriptor is validated or registered, never lazily per query.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An alias was not found in the registry.
    #[error("unknown calendar alias: {0}")]
    Lookup(String),

    /// Date-related error (out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument passed to a query.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout market-calendars-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Configuration(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mcal_core::{ensure, errors::Error};
/// fn offset(n: i32) -> mcal_core::Result<i32> {
///     ensure!(n <= 0, "open-day offset must be <= 0, got {n}");
///     Ok(n)
/// }
/// assert!(offset(-1).is_ok());
/// assert!(offset(1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Configuration(...))` immediately.
///
/// # Example
/// ```
/// use mcal_core::{fail, errors::Error};
/// fn always_err() -> mcal_core::Result<()> {
///     fail!("unusable definition");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Configuration(format!($($msg)*)))
    };
}
