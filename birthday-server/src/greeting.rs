//! Greeting computation
//!
//! Works on local wall-clock time: a birthday starts at local midnight.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// The birthday as it falls in `year`.
///
/// Feb 29 birthdays land on Mar 1 in non-leap years.
pub fn occurrence_in(birthdate: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthdate.month(), birthdate.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}

/// True when `now` falls on this year's occurrence of the birthday.
pub fn is_birthday(birthdate: NaiveDate, now: NaiveDateTime) -> bool {
    occurrence_in(birthdate, now.year()) == now.date()
}

/// Whole days from `now` until the next birthday midnight.
///
/// The candidate is this year's occurrence at midnight, moved to next year when it
/// is not strictly after `now`. Partial days are dropped, so the day before a
/// birthday counts as 0. Callers check [`is_birthday`] first.
pub fn days_until_next_occurrence(birthdate: NaiveDate, now: NaiveDateTime) -> i64 {
    let mut candidate = occurrence_in(birthdate, now.year()).and_time(NaiveTime::MIN);
    if candidate <= now {
        candidate = occurrence_in(birthdate, now.year() + 1).and_time(NaiveTime::MIN);
    }

    (candidate - now).num_days()
}

/// Greeting message for `username` as of `now`.
pub fn greeting(username: &str, birthdate: NaiveDate, now: NaiveDateTime) -> String {
    if is_birthday(birthdate, now) {
        format!("Hello, {}! Happy birthday!", username)
    } else {
        let days = days_until_next_occurrence(birthdate, now);
        format!("Hello, {}! Your birthday is in {} day(s)", username, days)
    }
}
