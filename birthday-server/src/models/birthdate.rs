//! Birthdate parsing and validation
//!
//! Dates are strict `YYYY-MM-DD` calendar dates with no time or offset.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Wire format for dates, also used when parsing
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono accepts single-digit months and signed years, so the shape is checked first
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("invalid date regex"));

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_RE.is_match(s) {
        return Err(ValidationError::InvalidDate);
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

/// True when `date` falls strictly after the calendar date of `now`.
pub fn is_future(date: NaiveDate, now: NaiveDateTime) -> bool {
    date > now.date()
}

/// Validated date of birth: strictly before the day it was accepted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Parse a date of birth and reject today or any later day.
    ///
    /// # Example
    /// ```
    /// use birthday_server::models::{Birthdate, ValidationError};
    /// use chrono::NaiveDate;
    ///
    /// let now = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    /// assert!(Birthdate::parse("1990-05-20", now).is_ok());
    /// assert_eq!(Birthdate::parse("2024-06-01", now), Err(ValidationError::NotInPast));
    /// assert_eq!(Birthdate::parse("20-05-1990", now), Err(ValidationError::InvalidDate));
    /// ```
    pub fn parse(s: &str, now: NaiveDateTime) -> Result<Self, ValidationError> {
        let date = parse_date(s)?;
        if date == now.date() || is_future(date, now) {
            return Err(ValidationError::NotInPast);
        }

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}
