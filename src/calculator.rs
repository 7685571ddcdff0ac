use serde::{Deserialize, Serialize};

use crate::reduce::reduce;
use crate::{CalendarDate, LifePathNumber, ParseError};

/// How much checking a date gets before it is reduced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarValidation {
    /// Only the `YYYY-MM-DD` shape is checked; `1999-99-99` is accepted.
    #[default]
    Lexical,
    /// The date must also exist in the Gregorian calendar.
    Strict,
}

/// Calculator settings, meant to be embedded in a host application's config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct CalculatorConfig {
    pub calendar_validation: CalendarValidation,
}

/// The reduced components of a date and the number they combine into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LifePathBreakdown {
    pub date:   CalendarDate,
    /// Reduced year component
    pub year:   u32,
    /// Reduced month component
    pub month:  u32,
    /// Reduced day component
    pub day:    u32,
    /// Sum of the three reduced components, before the final reduction
    pub total:  u32,
    pub number: LifePathNumber,
}

/// Maps dates of birth to life path numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifePathCalculator {
    config: CalculatorConfig,
}

impl LifePathCalculator {
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> CalculatorConfig {
        self.config
    }

    /// Computes the life path number of a `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// `ParseError::InvalidFormat` if the string is not `YYYY-MM-DD` or is
    /// all zeros. Strict validation adds `InvalidYear`, `InvalidMonth` and
    /// `InvalidDay`.
    pub fn compute(&self, date_of_birth: &str) -> Result<LifePathNumber, ParseError> {
        self.breakdown(date_of_birth).map(|b| b.number)
    }

    /// Computes the life path number of an already parsed date.
    ///
    /// # Errors
    /// Same as [`LifePathCalculator::compute`], minus the shape check.
    pub fn compute_date(&self, date: CalendarDate) -> Result<LifePathNumber, ParseError> {
        self.breakdown_date(date).map(|b| b.number)
    }

    /// Like [`LifePathCalculator::compute`] but keeps every intermediate value.
    ///
    /// # Errors
    /// Same as [`LifePathCalculator::compute`].
    pub fn breakdown(&self, date_of_birth: &str) -> Result<LifePathBreakdown, ParseError> {
        let date = date_of_birth.parse::<CalendarDate>().inspect_err(|e| {
            tracing::debug!(input = date_of_birth, error = %e, "rejected date of birth");
        })?;
        self.breakdown_date(date)
    }

    /// Like [`LifePathCalculator::compute_date`] but keeps every intermediate value.
    ///
    /// # Errors
    /// Same as [`LifePathCalculator::compute_date`].
    pub fn breakdown_date(&self, date: CalendarDate) -> Result<LifePathBreakdown, ParseError> {
        if self.config.calendar_validation == CalendarValidation::Strict {
            date.validate_calendar().inspect_err(|e| {
                tracing::debug!(%date, error = %e, "date failed calendar validation");
            })?;
        }

        let year = reduce(u32::from(date.year()));
        let month = reduce(u32::from(date.month()));
        let day = reduce(u32::from(date.day()));
        let total = year + month + day;

        // Only 0000-00-00 reduces to zero
        let number = LifePathNumber::try_from(reduce(total))
            .map_err(|_| ParseError::InvalidFormat(format!("{date} has no non-zero digits")))?;

        tracing::debug!(%date, year, month, day, total, %number, "computed life path number");

        Ok(LifePathBreakdown {
            date,
            year,
            month,
            day,
            total,
            number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> LifePathCalculator {
        LifePathCalculator::new(CalculatorConfig {
            calendar_validation: CalendarValidation::Strict,
        })
    }

    #[test]
    fn test_breakdown_worked_trace() {
        let b = LifePathCalculator::default().breakdown("1990-05-15").unwrap();
        assert_eq!(b.date.to_string(), "1990-05-15");
        assert_eq!((b.year, b.month, b.day), (1, 5, 6));
        assert_eq!(b.total, 12);
        assert_eq!(b.number.get(), 3);
    }

    #[test]
    fn test_breakdown_keeps_master_components() {
        // Month 11 and day 22 are master numbers before any reduction
        let b = LifePathCalculator::default().breakdown("1988-11-22").unwrap();
        assert_eq!((b.year, b.month, b.day), (8, 11, 22));
        assert_eq!(b.total, 41);
        assert_eq!(b.number.get(), 5);
    }

    #[test]
    fn test_year_master_changes_final_result() {
        // 2999 -> 29 -> 11; 11 + 9 + 2 = 22. Collapsing the year to 2 would give 4.
        let b = LifePathCalculator::default().breakdown("2999-09-02").unwrap();
        assert_eq!(b.year, 11);
        assert_eq!(b.total, 22);
        assert_eq!(b.number.get(), 22);
        assert!(b.number.is_master());
    }

    #[test]
    fn test_all_zero_date_rejected() {
        let result = LifePathCalculator::default().compute("0000-00-00");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_lexical_mode_accepts_impossible_dates() {
        let calc = LifePathCalculator::default();
        assert_eq!(calc.compute("1999-99-99").unwrap().get(), 1);
        assert!(calc.compute("2023-02-30").is_ok());
        assert!(calc.compute("2000-13-00").is_ok());
    }

    #[test]
    fn test_strict_mode() {
        let calc = strict();
        assert!(matches!(
            calc.compute("1999-99-99"),
            Err(ParseError::InvalidMonth(99))
        ));
        assert!(matches!(
            calc.compute("2023-02-29"),
            Err(ParseError::InvalidDay { .. })
        ));
        assert!(matches!(
            calc.compute("0000-01-01"),
            Err(ParseError::InvalidYear(0))
        ));
        // 2024 -> 8, 02 -> 2, 29 -> 11; 21 -> 3
        assert_eq!(calc.compute("2024-02-29").unwrap().get(), 3);
        assert_eq!(calc.compute("1990-05-15").unwrap().get(), 3);
    }

    #[test]
    fn test_strict_mode_still_checks_shape_first() {
        assert!(matches!(
            strict().compute("1990-5-15"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_compute_date() {
        let date = CalendarDate::new(2000, 1, 1).unwrap();
        let number = LifePathCalculator::default().compute_date(date).unwrap();
        assert_eq!(number.get(), 4);
    }

    #[test]
    fn test_config_serde() {
        let config: CalculatorConfig =
            serde_json::from_str(r#"{"calendar_validation":"strict"}"#).unwrap();
        assert_eq!(config.calendar_validation, CalendarValidation::Strict);

        let config: CalculatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.calendar_validation, CalendarValidation::Lexical);

        let json = serde_json::to_string(&CalculatorConfig::default()).unwrap();
        assert_eq!(json, r#"{"calendar_validation":"lexical"}"#);
    }

    #[test]
    fn test_breakdown_serde() {
        let b = LifePathCalculator::default().breakdown("1990-05-15").unwrap();
        let value = serde_json::to_value(b).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "1990-05-15",
                "year": 1,
                "month": 5,
                "day": 6,
                "total": 12,
                "number": 3
            })
        );
    }
}
