use std::collections::HashSet;

use crate::error::ValidationError;

/// Decides whether a sequence may be handed to a [`crate::Finder`].
pub trait Validator {
    fn validate(&self, numbers: Option<&[i64]>) -> Result<(), ValidationError>;
}

/// Accepts n distinct values, each within the inclusive range `[0, n]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RangeValidator;

impl Validator for RangeValidator {
    fn validate(&self, numbers: Option<&[i64]>) -> Result<(), ValidationError> {
        let numbers = match numbers {
            Some(numbers) if !numbers.is_empty() => numbers,
            _ => return Err(ValidationError::Empty),
        };

        // duplicates take priority over range, so scan for them first
        let mut seen = HashSet::with_capacity(numbers.len());
        if let Some(&value) = numbers.iter().find(|&&v| !seen.insert(v)) {
            return Err(ValidationError::Duplicate { value });
        }

        let n = numbers.len();
        if let Some(&value) = numbers.iter().find(|&&v| !in_range(v, n)) {
            return Err(ValidationError::OutOfRange { value, n });
        }

        Ok(())
    }
}

fn in_range(value: i64, n: usize) -> bool {
    u64::try_from(value).is_ok_and(|v| v <= n as u64)
}
