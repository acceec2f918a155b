//! Shared US holiday-rule catalog.
//!
//! Rule constructors used by the US exchange definitions. Each function
//! returns a fresh [`HolidayRule`] value, so leaf modules compose rule
//! lists without sharing mutable state.
//!
//! Useful resource for changes here:
//! <https://www.cmegroup.com/tools-information/holiday-calendar.html>

use chrono::{NaiveDate, Weekday};
use mcal_time::{HolidayRule, Observance, Recurrence};

/// New Year's Day, Jan 1. Observed the following Monday when it falls on
/// a Sunday; a Saturday Jan 1 is simply absorbed by the weekend.
pub fn us_new_years_day() -> HolidayRule {
    HolidayRule::new("New Year's Day", Recurrence::FixedDate { month: 1, day: 1 })
        .observed(Observance::SundayToMonday)
}

/// Martin Luther King Jr. Day, 3rd Monday of January, observed by US
/// exchanges from 1998.
pub fn us_martin_luther_king_jr_after_1998() -> HolidayRule {
    HolidayRule::new(
        "Dr. Martin Luther King Jr. Day",
        Recurrence::NthWeekday {
            month: 1,
            weekday: Weekday::Mon,
            nth: 3,
        },
    )
    .from_year(1998)
}

/// Presidents' Day (Washington's Birthday), 3rd Monday of February.
pub fn us_presidents_day() -> HolidayRule {
    HolidayRule::new(
        "President's Day",
        Recurrence::NthWeekday {
            month: 2,
            weekday: Weekday::Mon,
            nth: 3,
        },
    )
}

/// Good Friday, two days before Western Easter Sunday.
pub fn good_friday() -> HolidayRule {
    HolidayRule::new("Good Friday", Recurrence::EasterOffset { days: -2 })
}

/// Memorial Day, last Monday of May.
pub fn us_memorial_day() -> HolidayRule {
    HolidayRule::new(
        "Memorial Day",
        Recurrence::NthWeekday {
            month: 5,
            weekday: Weekday::Mon,
            nth: -1,
        },
    )
}

/// Independence Day, Jul 4, observed on the nearest workday.
pub fn us_independence_day() -> HolidayRule {
    HolidayRule::new("July 4th", Recurrence::FixedDate { month: 7, day: 4 })
        .observed(Observance::NearestWorkday)
}

/// Labor Day, 1st Monday of September.
pub fn us_labor_day() -> HolidayRule {
    HolidayRule::new(
        "Labor Day",
        Recurrence::NthWeekday {
            month: 9,
            weekday: Weekday::Mon,
            nth: 1,
        },
    )
}

/// Thanksgiving Day, 4th Thursday of November.
pub fn us_thanksgiving_day() -> HolidayRule {
    HolidayRule::new(
        "Thanksgiving Day",
        Recurrence::NthWeekday {
            month: 11,
            weekday: Weekday::Thu,
            nth: 4,
        },
    )
}

/// Christmas Day, Dec 25, observed on the nearest workday.
pub fn christmas() -> HolidayRule {
    HolidayRule::new("Christmas", Recurrence::FixedDate { month: 12, day: 25 })
        .observed(Observance::NearestWorkday)
}

/// The day after Thanksgiving ("Black Friday"), an early-close day on US
/// exchanges from 1993.
pub fn us_black_friday_in_or_after_1993() -> HolidayRule {
    HolidayRule::new(
        "Black Friday",
        Recurrence::Offset {
            base: Box::new(Recurrence::NthWeekday {
                month: 11,
                weekday: Weekday::Thu,
                nth: 4,
            }),
            days: 1,
        },
    )
    .from_year(1993)
}

/// Christmas Eve before 1993, when it falls Monday–Thursday.
pub fn christmas_eve_before_1993() -> HolidayRule {
    HolidayRule::new(
        "Christmas Eve",
        Recurrence::FixedDate { month: 12, day: 24 },
    )
    .only_on(&[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu])
    .until_year(1992)
}

/// Christmas Eve in or after 1993, when it falls Monday–Thursday.
///
/// The source data splits this rule at 1993; the bounds are kept verbatim
/// so collapsing the pair later is a data edit only.
pub fn christmas_eve_in_or_after_1993() -> HolidayRule {
    HolidayRule::new(
        "Christmas Eve",
        Recurrence::FixedDate { month: 12, day: 24 },
    )
    .only_on(&[Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu])
    .from_year(1993)
}

/// US national days of mourning: one-off market closures declared for
/// presidential funerals.
pub fn us_national_days_of_mourning() -> Vec<NaiveDate> {
    [
        (1994, 4, 27), // President Nixon
        (2004, 6, 11), // President Reagan
        (2007, 1, 2),  // President Ford
        (2018, 12, 5), // President G. H. W. Bush
        (2025, 1, 9),  // President Carter
    ]
    .into_iter()
    .map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("hard-coded mourning date is valid")
    })
    .collect()
}
