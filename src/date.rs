use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_LENGTH, DATE_SEPARATOR, FIRST_SEPARATOR_AT, MAX_MONTH, MAX_TWO_DIGIT_FIELD,
    MAX_YEAR_FIELD, MIN_DAY, SECOND_SEPARATOR_AT,
};
use crate::types::days_in_month;
use crate::{ParseError, prelude::*};

/// A date of birth in `YYYY-MM-DD` shape.
///
/// Only the lexical shape is checked on construction: `1999-99-99` is a
/// valid `CalendarDate`. Use [`CalendarDate::validate_calendar`] when the
/// Gregorian calendar matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct CalendarDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl CalendarDate {
    /// Creates a date from raw field values.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if a value does not fit its
    /// fixed-width field (year above 9999, month or day above 99).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year > MAX_YEAR_FIELD || month > MAX_TWO_DIGIT_FIELD || day > MAX_TWO_DIGIT_FIELD {
            return Err(ParseError::InvalidFormat(format!(
                "{year}-{month}-{day} does not fit YYYY-MM-DD"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year field
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month field
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day field
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Checks the fields against the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `InvalidYear` for year 0, `InvalidMonth` outside 1..=12 and
    /// `InvalidDay` when the day does not exist in that month.
    pub fn validate_calendar(&self) -> Result<(), ParseError> {
        if self.year == 0 {
            return Err(ParseError::InvalidYear(self.year));
        }
        if self.month == 0 || self.month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(self.month));
        }
        if self.day < MIN_DAY || self.day > days_in_month(self.year, self.month) {
            return Err(ParseError::InvalidDay {
                year:  self.year,
                month: self.month,
                day:   self.day,
            });
        }
        Ok(())
    }

    /// Folds a run of ASCII digits into a number; the caller has already
    /// checked every byte is a digit.
    fn fold_digits(digits: &[u8]) -> u16 {
        digits
            .iter()
            .fold(0, |acc, b| acc * 10 + u16::from(b - b'0'))
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != DATE_LENGTH {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
            FIRST_SEPARATOR_AT | SECOND_SEPARATOR_AT => *b == DATE_SEPARATOR,
            _ => b.is_ascii_digit(),
        });
        if !shape_ok {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let year = Self::fold_digits(&bytes[..FIRST_SEPARATOR_AT]);
        let month = Self::fold_digits(&bytes[FIRST_SEPARATOR_AT + 1..SECOND_SEPARATOR_AT]);
        let day = Self::fold_digits(&bytes[SECOND_SEPARATOR_AT + 1..]);

        // Two digit fields are at most 99
        let month = u8::try_from(month).map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
        let day = u8::try_from(day).map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;

        Self::new(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
