//! Construction of semiprimes with an exact number of decimal digits.
//!
//! Two strategies are provided: [generate_semiprime] builds one product of a
//! requested size from two factors of roughly half that size, and
//! [find_semiprimes_in_range] enumerates products inside an explicit interval.

use crate::error::{Error, Result};
use crate::nt_funcs::{next_prime_with, prev_prime_with};
use crate::primality::is_prime;
use crate::traits::{SearchConfig, SemiprimeBase, SemiprimeRefBase};
use core::fmt;
use num_integer::Roots;
use tracing::{debug, trace};

/// A product `n = p * q` of two primes. The factors are not ordered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Semiprime<T> {
    pub p: T,
    pub q: T,
    pub n: T,
}

impl<T: SemiprimeBase> Semiprime<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    /// Multiply the two factors. The factors are not tested for primality.
    pub fn from_factors(p: T, q: T) -> Result<Self> {
        let n = checked_product(&p, &q)?;
        Ok(Self { p, q, n })
    }

    /// Check that the stored product equals `p * q` and has `digits` decimal digits.
    pub fn check(&self, digits: usize) -> Result<()> {
        let product = checked_product(&self.p, &self.q)?;
        if product != self.n {
            return Err(Error::FactorMismatch {
                p: self.p.to_string(),
                q: self.q.to_string(),
                product: product.to_string(),
                expected: self.n.to_string(),
            });
        }

        let actual = self.n.decimal_digits();
        if actual != digits {
            return Err(Error::DigitMismatch {
                value: self.n.to_string(),
                actual,
                expected: digits,
            });
        }
        Ok(())
    }

    /// Whether both factors pass the trial division test
    pub fn has_prime_factors(&self) -> bool {
        is_prime(&self.p) && is_prime(&self.q)
    }
}

impl<T: fmt::Display> fmt::Display for Semiprime<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} × {}", self.n, self.p, self.q)
    }
}

fn checked_product<T: SemiprimeBase>(p: &T, q: &T) -> Result<T> {
    p.checked_mul(q).ok_or_else(|| Error::Overflow {
        p: p.to_string(),
        q: q.to_string(),
    })
}

fn count_adjustment(adjustments: &mut usize, digits: usize, config: &SearchConfig) -> Result<()> {
    *adjustments += 1;
    match config.max_adjustments {
        Some(max) if *adjustments > max => Err(Error::AdjustmentsExhausted { digits, steps: max }),
        _ => Ok(()),
    }
}

pub(crate) fn pow10<T: SemiprimeBase>(digits: usize) -> Result<T> {
    T::checked_pow10(digits).ok_or(Error::CapacityExceeded { digits })
}

/// Keep `p` fixed and walk the prime `q` down, then up, until `p * q` has
/// exactly `digits` decimal digits.
pub(crate) fn fit_cofactor<T: SemiprimeBase>(
    p: T,
    q: T,
    digits: usize,
    config: &SearchConfig,
) -> Result<Semiprime<T>>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let mut q = q;
    let mut n = checked_product(&p, &q)?;
    let mut adjustments = 0;

    while n.decimal_digits() > digits {
        count_adjustment(&mut adjustments, digits, config)?;
        q = prev_prime_with(&q, config)?;
        n = checked_product(&p, &q)?;
        trace!(%q, %n, "shrinking cofactor");
    }
    while n.decimal_digits() < digits {
        count_adjustment(&mut adjustments, digits, config)?;
        q = next_prime_with(&q, config)?;
        n = checked_product(&p, &q)?;
        trace!(%q, %n, "growing cofactor");
    }

    if adjustments > 0 {
        debug!(digits, adjustments, "cofactor adjusted");
    }
    Ok(Semiprime { p, q, n })
}

/// Generate a semiprime with exactly `target_digits` decimal digits.
///
/// The first factor is the least prime above `10^(target_digits / 2)`, and the
/// second factor starts at the least prime above `10^target_digits / p` and is
/// then moved prime by prime until the product has the requested size. For an
/// odd digit count the first factor is the smaller one.
///
/// The result is deterministic. `config = None` uses [SearchConfig::default].
pub fn generate_semiprime<T: SemiprimeBase>(
    target_digits: usize,
    config: Option<SearchConfig>,
) -> Result<Semiprime<T>>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    if target_digits == 0 {
        return Err(Error::InvalidDigitCount(target_digits));
    }
    let config = config.unwrap_or_default();

    let target: T = pow10(target_digits)?;
    let half_digits = target_digits / 2;
    let p = next_prime_with(&pow10::<T>(half_digits)?, &config)?;
    let q = next_prime_with(&(&target / &p), &config)?;

    let result = fit_cofactor(p, q, target_digits, &config)?;
    debug!(digits = target_digits, %result, "generated semiprime");
    Ok(result)
}

/// The next prime, or None if it lies beyond the capacity of the integer type
fn next_prime_in_type<T: SemiprimeBase>(target: &T, config: &SearchConfig) -> Result<Option<T>>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    match next_prime_with(target, config) {
        Ok(p) => Ok(Some(p)),
        Err(Error::SearchOverflow { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Find up to `count` semiprimes `n = p * q` with `min_val <= n <= max_val`
/// and the same number of decimal digits as `min_val`.
///
/// `p` walks the primes upwards from `sqrt(min_val)` while `p * p < max_val`,
/// and for each `p` the cofactor `q` walks the primes from `min_val / p` until
/// the product leaves the range. Results come ordered by `p`, then by `q`. A
/// product reachable as both `p * q` and `q * p` is reported twice. Products
/// that overflow the integer type count as being above `max_val`.
pub fn find_semiprimes_in_range<T: SemiprimeBase>(
    min_val: &T,
    max_val: &T,
    count: usize,
    config: Option<SearchConfig>,
) -> Result<Vec<Semiprime<T>>>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let config = config.unwrap_or_default();
    let digits = min_val.decimal_digits();
    let mut results = Vec::new();

    let mut next_p = next_prime_in_type(&Roots::sqrt(min_val), &config)?;
    while results.len() < count {
        let p = match next_p {
            Some(p) => p,
            None => break,
        };
        // a square beyond the integer type is beyond max_val as well
        match p.checked_mul(&p) {
            Some(square) if &square < max_val => {}
            _ => break,
        }

        let mut next_q = next_prime_in_type(&(min_val / &p), &config)?;
        while let Some(q) = next_q {
            let n = match p.checked_mul(&q) {
                Some(n) if &n <= max_val => n,
                _ => break,
            };
            if &n >= min_val && n.decimal_digits() == digits {
                trace!(%p, %q, %n, "semiprime in range");
                results.push(Semiprime {
                    p: p.clone(),
                    q: q.clone(),
                    n,
                });
                if results.len() >= count {
                    break;
                }
            }
            next_q = next_prime_in_type(&q, &config)?;
        }
        next_p = next_prime_in_type(&p, &config)?;
    }

    debug!(%min_val, %max_val, found = results.len(), "range search finished");
    Ok(results)
}
