//! Shared helpers used by the section validators.

use std::collections::HashSet;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(
    errors: &mut Vec<String>,
    name: &str,
    value: usize,
    min: usize,
    max: usize,
) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push one error per value that appears more than once.
pub(crate) fn validate_unique<'a>(
    errors: &mut Vec<String>,
    name: &str,
    values: impl IntoIterator<Item = &'a str>,
) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for value in values {
        if !seen.insert(value) && reported.insert(value) {
            errors.push(format!("{name} contains duplicate '{value}'"));
        }
    }
}
