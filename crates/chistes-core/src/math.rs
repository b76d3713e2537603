//! Integer helpers behind the `/lcm` and `/increment` endpoints.
//!
//! LCM is computed through the Euclidean GCD. Operands must be strictly
//! positive; zero and negative inputs are rejected rather than given
//! made-up semantics.

use crate::error::CoreError;

/// Greatest common divisor via Euclid's algorithm.
///
/// `gcd(x, 0) == x`, otherwise `gcd(y, x % y)`.
pub fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        return a;
    }
    gcd(b, a % b)
}

/// Least common multiple of two positive integers.
///
/// Divides before multiplying so intermediate values stay as small as the
/// result allows; a result that still exceeds `i64::MAX` is
/// [`CoreError::Overflow`].
pub fn lcm(a: i64, b: i64) -> Result<i64, CoreError> {
    for value in [a, b] {
        if value <= 0 {
            return Err(CoreError::NonPositiveOperand { value });
        }
    }
    (a / gcd(a, b)).checked_mul(b).ok_or(CoreError::Overflow)
}

/// Folds [`lcm`] left to right over `values`, starting from the first one.
///
/// A single value is returned as-is after the positivity check. Callers that
/// need "at least two values" enforce it themselves.
pub fn lcm_all(values: &[i64]) -> Result<i64, CoreError> {
    let (&first, rest) = values.split_first().ok_or(CoreError::EmptyInput)?;
    if first <= 0 {
        return Err(CoreError::NonPositiveOperand { value: first });
    }
    rest.iter().try_fold(first, |acc, &n| lcm(acc, n))
}

/// Returns `n + 1`.
pub fn increment(n: i64) -> Result<i64, CoreError> {
    n.checked_add(1).ok_or(CoreError::Overflow)
}
