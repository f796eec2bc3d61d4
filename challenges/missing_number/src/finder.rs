use crate::error::FinderError;

/// Computes the number missing from a validated sequence.
pub trait Finder {
    fn find_missing(&self, numbers: Option<&[i64]>) -> Result<i64, FinderError>;
}

// * The arithmetic series sum (sum 0..=n) formula is n * (n + 1) / 2
// * thus, the missing number is the difference of the expected sum and the actual sum
#[derive(Debug, Default, Clone, Copy)]
pub struct SumFinder;

impl Finder for SumFinder {
    fn find_missing(&self, numbers: Option<&[i64]>) -> Result<i64, FinderError> {
        let numbers = numbers.ok_or(FinderError::Absent)?;
        let n = numbers.len();

        let expected = series_sum(n).ok_or(FinderError::Overflow { n })?;
        let actual = numbers
            .iter()
            .try_fold(0i64, |acc, &v| acc.checked_add(v))
            .ok_or(FinderError::Overflow { n })?;
        expected
            .checked_sub(actual)
            .ok_or(FinderError::Overflow { n })
    }
}

fn series_sum(n: usize) -> Option<i64> {
    let n = i64::try_from(n).ok()?;
    n.checked_mul(n.checked_add(1)?).map(|s| s / 2)
}
