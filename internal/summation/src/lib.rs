#![warn(missing_docs)]

//! Integer summation helpers.
//!
//! A deliberately small crate exercising table-driven unit tests, a
//! criterion benchmark and a documented example over a pure function.

/// Sum a sequence of integers.
///
/// An empty sequence sums to zero.
///
/// ```
/// use summation::sum;
///
/// assert_eq!(sum(&[1, 1, 3]), 5);
/// ```
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}
