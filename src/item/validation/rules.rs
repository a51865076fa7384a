//! Reusable field rules.

use super::{Rule, Violation};

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Latest accepted release year.
pub const MAX_YEAR: i32 = 2100;

/// Reject blank strings.
pub fn not_empty(field: &'static str, value: &str, out: &mut Vec<Violation>) {
    if value.trim().is_empty() {
        out.push(Violation::new(field, Rule::Empty));
    }
}

/// Reject empty binary content.
pub fn not_empty_bytes(field: &'static str, value: &[u8], out: &mut Vec<Violation>) {
    if value.is_empty() {
        out.push(Violation::new(field, Rule::Empty));
    }
}

/// Reject zero for counters and ordinal numbers.
pub fn positive(field: &'static str, value: u32, out: &mut Vec<Violation>) {
    if value == 0 {
        out.push(Violation::new(field, Rule::NotPositive));
    }
}

/// Reject years outside [`MIN_YEAR`]..=[`MAX_YEAR`].
pub fn year_in_range(field: &'static str, year: i32, out: &mut Vec<Violation>) {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        out.push(Violation::new(
            field,
            Rule::OutOfRange {
                min: i64::from(MIN_YEAR),
                max: i64::from(MAX_YEAR),
            },
        ));
    }
}

/// Reject `value` smaller than `floor`, the value of the field named `other`.
pub fn at_least(
    field: &'static str,
    value: i32,
    other: &'static str,
    floor: i32,
    out: &mut Vec<Violation>,
) {
    if value < floor {
        out.push(Violation::new(field, Rule::LessThan { other }));
    }
}
