//! Age derived from a birth date.
//!
//! Age is never stored. It is computed whenever a record is serialized so
//! that it stays correct as time passes.

use chrono::{Datelike, NaiveDate, Utc};

/// Whole years elapsed between `birth_date` and `today`.
///
/// The year difference is reduced by one when `today` falls before the
/// birthday in the current year, comparing `(month, day)` pairs. A birth
/// date of Feb 29 therefore counts the birthday as reached on Mar 1 in
/// non-leap years.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Age as of today's UTC date.
pub fn current_age(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, today())
}

/// Today's calendar date in UTC.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
