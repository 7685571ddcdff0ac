//! Numerology life path numbers.
//!
//! A date of birth in `YYYY-MM-DD` form is reduced component by component
//! (year, month, day) to a single digit by repeated digit sums, the three
//! results are added, and the sum is reduced the same way. The master
//! numbers 11, 22 and 33 are never reduced.
//!
//! ```
//! let number = life_path::compute_life_path_number("1990-05-15").unwrap();
//! assert_eq!(number.get(), 3);
//! ```

mod calculator;
mod consts;
mod date;
mod prelude;
mod reduce;
mod types;


pub use calculator::{CalculatorConfig, CalendarValidation, LifePathBreakdown, LifePathCalculator};
pub use consts::*;
pub use date::CalendarDate;
pub use reduce::{digit_sum, is_master_number, reduce};
pub use types::{LifePathNumber, days_in_month, is_leap_year};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input is not `YYYY-MM-DD`, or carries no non-zero digit.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid year: {0} (must be at least 1)")]
    InvalidYear(u16),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// Value is not one of 1..=9, 11, 22, 33.
    #[error("Invalid life path number: {0}")]
    InvalidNumber(u32),
}

/// Computes the life path number of a `YYYY-MM-DD` date of birth.
///
/// Only the lexical shape is checked, so `1999-99-99` still yields a number.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` if the input does not match
/// `^\d{4}-\d{2}-\d{2}$` or is `0000-00-00`.
pub fn compute_life_path_number(date_of_birth: &str) -> Result<LifePathNumber, ParseError> {
    LifePathCalculator::default().compute(date_of_birth)
}
