//! Western (Gregorian) Easter Sunday arithmetic.

use chrono::NaiveDate;

/// Compute Easter Sunday for `year` using Oudin's algorithm.
///
/// Returns `None` for years before the Gregorian reform (1583) — the
/// algorithm is only defined on the Gregorian calendar.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }
    let y = year;
    let g = y % 19;
    let c = y / 100;
    let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
    let p = i - j;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
