//! Field validation for catalog entities.
//!
//! Each kind lists its rules in [`Validate::violations`]; the facade runs them
//! before any fetch or engine work and reports every violation at once.

mod rules;

pub use rules::{at_least, not_empty, not_empty_bytes, positive, year_in_range, MAX_YEAR, MIN_YEAR};

use std::fmt;

use thiserror::Error;

/// A broken field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    #[error("must not be empty")]
    Empty,

    #[error("must be between {min} and {max}")]
    OutOfRange { min: i64, max: i64 },

    #[error("must be greater than zero")]
    NotPositive,

    #[error("must not be less than {other}")]
    LessThan { other: &'static str },
}

impl Rule {
    /// Upper-case code used in event keys
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Rule::Empty => "EMPTY",
            Rule::OutOfRange { .. } => "OUT_OF_RANGE",
            Rule::NotPositive => "NOT_POSITIVE",
            Rule::LessThan { .. } => "LESS_THAN",
        }
    }
}

/// One field that failed one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
}

impl Violation {
    #[must_use]
    pub const fn new(field: &'static str, rule: Rule) -> Self {
        Violation { field, rule }
    }

    /// Key fragment such as `CZECH_NAME_EMPTY`
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}_{}", self.field.to_uppercase(), self.rule.code())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.rule)
    }
}

/// Field rules of one entity kind.
pub trait Validate {
    /// Every broken rule, in field order
    fn violations(&self) -> Vec<Violation>;

    fn validate(&self) -> Result<(), Vec<Violation>> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Validate for Named {
        fn violations(&self) -> Vec<Violation> {
            let mut out = Vec::new();
            not_empty("name", self.0, &mut out);
            out
        }
    }

    #[test]
    fn test_validate_ok_when_no_violations() {
        assert!(Named("Alien").validate().is_ok());
    }

    #[test]
    fn test_validate_collects_violations() {
        let err = Named("  ").validate().unwrap_err();
        assert_eq!(err, vec![Violation::new("name", Rule::Empty)]);
    }

    #[test]
    fn test_violation_key_and_display() {
        let v = Violation::new("czech_name", Rule::Empty);
        assert_eq!(v.key(), "CZECH_NAME_EMPTY");
        assert_eq!(v.to_string(), "czech_name must not be empty");

        let v = Violation::new("year", Rule::OutOfRange { min: 1, max: 2 });
        assert_eq!(v.key(), "YEAR_OUT_OF_RANGE");
        assert_eq!(v.to_string(), "year must be between 1 and 2");
    }
}
