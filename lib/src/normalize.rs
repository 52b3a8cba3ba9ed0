//! Turning a real solution vector into the smallest positive integers.

use log::{debug, warn};
use malachite::num::arithmetic::traits::{Gcd, Lcm};
use malachite::num::basic::traits::One;
use malachite::{Natural, Rational};

use crate::config::BalanceConfig;
use crate::error::ChembalError;

/// Approximates `value` by a fraction using its continued fraction expansion.
///
/// Convergents are computed until one is within `tolerance` (relative to
/// `max(1, |value|)`) of the value, or the next one would need a
/// denominator larger than `max_denominator`.
///
/// Returns `None` for NaN, infinities and values too large for `i64`.
///
/// # Example
/// ```
/// use chembal::normalize::rationalize;
/// use malachite::Rational;
///
/// let third = rationalize(1.0 / 3.0, 1e-9, 1_000_000).unwrap();
/// assert_eq!(third, Rational::from(1) / Rational::from(3));
/// ```
pub fn rationalize(value: f64, tolerance: f64, max_denominator: i64) -> Option<Rational> {
    if !value.is_finite() {
        return None;
    }
    let target = value.abs();

    // h/k are the convergents, index -2 and -1 seed the recurrence
    let (mut h0, mut h1) = (0i64, 1i64);
    let (mut k0, mut k1) = (1i64, 0i64);
    let mut best = None;
    let mut x = target;

    for _ in 0..64 {
        let a = x.floor();
        if a >= i64::MAX as f64 {
            break;
        }
        let a = a as i64;
        let h2 = a.checked_mul(h1).and_then(|v| v.checked_add(h0));
        let k2 = a.checked_mul(k1).and_then(|v| v.checked_add(k0));
        let (Some(h2), Some(k2)) = (h2, k2) else {
            break;
        };
        if k2 > max_denominator {
            break;
        }

        best = Some((h2, k2));
        (h0, h1) = (h1, h2);
        (k0, k1) = (k1, k2);

        let error = (target - h2 as f64 / k2 as f64).abs();
        let remainder = x - a as f64;
        if error <= tolerance * target.max(1.0) || remainder <= f64::EPSILON {
            break;
        }
        x = 1.0 / remainder;
    }

    let (numerator, denominator) = best?;
    let numerator = if value < 0.0 { -numerator } else { numerator };
    Some(Rational::from(numerator) / Rational::from(denominator))
}

/// Scales a solution vector to the smallest positive integer coefficients.
///
/// Every value is turned into a fraction, the vector is multiplied by the
/// least common multiple of the denominators, and the result is divided by
/// the greatest common divisor of its entries. If an entry is zero or
/// negative, `|min| + 1` is first added to every entry; this keeps the
/// ratios only when all entries already had the same sign, so callers
/// should check the result against the original constraints.
///
/// # Errors
/// [`ChembalError::NoSolution`] if the vector is empty or all zero, if a
/// value is not finite, or if a coefficient does not fit in `i64`.
///
/// # Example
/// ```
/// use chembal::normalize::normalize;
/// use chembal::BalanceConfig;
///
/// let coefficients = normalize(&[1.0, 0.5, 1.0], &BalanceConfig::default()).unwrap();
/// assert_eq!(coefficients, vec![2, 1, 2]);
/// ```
pub fn normalize(values: &[f64], config: &BalanceConfig) -> Result<Vec<i64>, ChembalError> {
    if values.is_empty() {
        return Err(ChembalError::no_solution("there are no coefficients"));
    }

    let fractions = values
        .iter()
        .map(|&v| {
            rationalize(v, config.rational_tolerance, config.max_denominator)
                .ok_or_else(|| ChembalError::no_solution(format!("{v} cannot be written as a fraction")))
        })
        .collect::<Result<Vec<Rational>, _>>()?;

    // multiply solutions by the least common multiple of denominators to get integer solutions
    let mut lcm = Natural::ONE;
    for fraction in fractions.iter() {
        lcm = lcm.lcm(fraction.denominator_ref());
    }
    debug!("common denominator: {lcm}");
    let scale = Rational::from(&lcm);

    let mut coefficients = fractions
        .iter()
        .map(|f| {
            i64::try_from(&(f * &scale))
                .map_err(|_| ChembalError::no_solution("coefficient does not fit in 64 bits"))
        })
        .collect::<Result<Vec<i64>, _>>()?;

    if coefficients.iter().all(|&c| c == 0) {
        return Err(ChembalError::no_solution("all coefficients are zero"));
    }

    let min = coefficients.iter().copied().min().unwrap_or(1);
    if min <= 0 {
        let offset = min
            .checked_neg()
            .and_then(|v| v.checked_add(1))
            .ok_or_else(|| ChembalError::no_solution("coefficient does not fit in 64 bits"))?;
        warn!("shifting coefficients {coefficients:?} by {offset} to make them positive");
        for c in coefficients.iter_mut() {
            *c = c
                .checked_add(offset)
                .ok_or_else(|| ChembalError::no_solution("coefficient does not fit in 64 bits"))?;
        }
    }

    let gcd = coefficients
        .iter()
        .filter(|&&c| c != 0)
        .fold(0u64, |acc, c| acc.gcd(c.unsigned_abs()));
    let divisor = i64::try_from(gcd).unwrap_or(1);
    if divisor > 1 {
        for c in coefficients.iter_mut() {
            *c /= divisor;
        }
    }

    Ok(coefficients)
}
