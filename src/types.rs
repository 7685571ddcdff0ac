use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH, MAX_SINGLE_DIGIT,
};
use crate::reduce::is_master_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A life path number, guaranteed to be one of 1..=9, 11, 22 or 33.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LifePathNumber(u8);

impl LifePathNumber {
    /// Creates a new `LifePathNumber`, validating that it's in the closed set
    ///
    /// # Errors
    /// Returns `ParseError::InvalidNumber` for 0, 10, 12..=21, 23..=32 and anything above 33.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let wide = u32::from(value);
        if (1..=MAX_SINGLE_DIGIT).contains(&wide) || is_master_number(wide) {
            Ok(Self(value))
        } else {
            Err(ParseError::InvalidNumber(wide))
        }
    }

    /// Returns the number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// True for 11, 22 and 33
    pub fn is_master(self) -> bool {
        is_master_number(u32::from(self.0))
    }

    /// Conventional numerology title for the number
    pub const fn archetype(self) -> &'static str {
        match self.0 {
            1 => "The Leader",
            2 => "The Peacemaker",
            3 => "The Communicator",
            4 => "The Builder",
            5 => "The Adventurer",
            6 => "The Nurturer",
            7 => "The Seeker",
            8 => "The Achiever",
            9 => "The Humanitarian",
            11 => "The Intuitive",
            22 => "The Master Builder",
            // 33 is the only value left after validation
            _ => "The Master Teacher",
        }
    }
}

impl TryFrom<u8> for LifePathNumber {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for LifePathNumber {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let narrow = u8::try_from(value).map_err(|_| ParseError::InvalidNumber(value))?;
        Self::new(narrow)
    }
}

impl From<LifePathNumber> for u8 {
    fn from(number: LifePathNumber) -> Self {
        number.0
    }
}

impl From<LifePathNumber> for u32 {
    fn from(number: LifePathNumber) -> Self {
        Self::from(number.0)
    }
}

impl fmt::Display for LifePathNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
