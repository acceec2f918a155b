//! Exchange calendar for CME Agriculture products.
//!
//! Open 17:01 the prior evening, close 17:00, America/Chicago.
//!
//! Regularly-observed holidays: New Year's Day, Dr. Martin Luther King
//! Jr. Day, Presidents' Day, Good Friday, Memorial Day, Independence
//! Day, Labor Day, Thanksgiving, Christmas. Early close at 12:00 on the
//! day after Thanksgiving and on a weekday Christmas Eve.
//!
//! The CME applies different holiday schedules per product group — on
//! July 4th weekends, for instance, equity/FX/metals products trade a
//! shortened session while grain, oilseed, livestock, dairy and lumber
//! products are fully closed. This calendar covers the agricultural
//! groups.

use chrono::NaiveTime;
use chrono_tz::America::Chicago;
use mcal_core::Result;
use mcal_time::RuleCalendar;

use crate::descriptor::ExchangeCalendar;
use crate::holidays_us::{
    christmas, christmas_eve_before_1993, christmas_eve_in_or_after_1993, good_friday,
    us_black_friday_in_or_after_1993, us_independence_day, us_labor_day,
    us_martin_luther_king_jr_after_1998, us_memorial_day, us_national_days_of_mourning,
    us_new_years_day, us_presidents_day, us_thanksgiving_day,
};

/// Build the CME Agriculture descriptor.
pub fn calendar() -> Result<ExchangeCalendar> {
    ExchangeCalendar::builder("CME_Agriculture", Chicago)
        .aliases(&[
            "CME_Agriculture",
            "CBOT_Agriculture",
            "COMEX_Agriculture",
            "NYMEX_Agriculture",
        ])
        .open_time(hm(17, 1))
        .close_time(hm(17, 0))
        .open_day_offset(-1)
        .regular_holidays(RuleCalendar::new(vec![
            us_new_years_day(),
            us_martin_luther_king_jr_after_1998(),
            us_presidents_day(),
            good_friday(),
            us_memorial_day(),
            us_independence_day(),
            us_labor_day(),
            us_thanksgiving_day(),
            christmas(),
        ]))
        .adhoc_holidays(us_national_days_of_mourning())
        .special_close(
            hm(12, 0),
            RuleCalendar::new(vec![
                us_black_friday_in_or_after_1993(),
                christmas_eve_before_1993(),
                christmas_eve_in_or_after_1993(),
            ]),
        )
        .build()
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("hard-coded session time is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builds_and_validates() {
        let cal = calendar().unwrap();
        assert_eq!(cal.name(), "CME_Agriculture");
        assert_eq!(cal.aliases().len(), 4);
        assert_eq!(cal.open_day_offset(), -1);
        assert_eq!(cal.regular_holidays().rules().len(), 9);
        assert_eq!(cal.special_closes().len(), 1);
        assert!(cal.special_opens().is_empty());
    }
}
