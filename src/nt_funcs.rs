//! Directional prime search built on the trial division test.
//!
//! Both directions only test odd candidates. The unbounded variants follow
//! the plain definition and never give up, the `_with` variants honor the
//! step limit of a [SearchConfig]. Searching upwards stops with None (or an
//! error) instead of wrapping around at the top of a primitive type.

use crate::error::{Error, Result};
use crate::primality::is_prime;
use crate::traits::{SearchConfig, SemiprimeBase, SemiprimeRefBase};
use tracing::trace;

/// First odd candidate above `target`, or None if it doesn't fit in the type
fn first_candidate_above<T: SemiprimeBase>(target: &T, two: &T) -> Option<T> {
    if target.is_even() {
        target.checked_add(&T::one())
    } else {
        target.checked_add(two)
    }
}

/// Return the least prime strictly greater than `target`, or None if that
/// prime is beyond the capacity of the integer type
pub fn next_prime<T: SemiprimeBase>(target: &T) -> Option<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let two = T::one() + T::one();
    if target < &two {
        return Some(two);
    }

    let mut candidate = first_candidate_above(target, &two)?;
    while !is_prime(&candidate) {
        candidate = candidate.checked_add(&two)?;
    }
    Some(candidate)
}

/// Return the greatest prime strictly less than `target`. The result is
/// floored at 2, which is also returned when there is no prime below `target`.
pub fn prev_prime<T: SemiprimeBase>(target: &T) -> T
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let two = T::one() + T::one();
    if target <= &(&two + T::one()) {
        return two;
    }

    let mut candidate = if target.is_even() {
        target - T::one()
    } else {
        target - &two
    };
    while candidate > two && !is_prime(&candidate) {
        candidate = candidate - &two;
    }
    candidate
}

/// Same as [next_prime], but fails with [Error::SearchExhausted] after testing
/// `config.max_steps` candidates, and with [Error::SearchOverflow] when the
/// search runs past the capacity of the integer type.
pub fn next_prime_with<T: SemiprimeBase>(target: &T, config: &SearchConfig) -> Result<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let overflow = || Error::SearchOverflow {
        start: target.to_string(),
    };
    let max_steps = match config.max_steps {
        Some(m) => m,
        None => return next_prime(target).ok_or_else(overflow),
    };

    let two = T::one() + T::one();
    if target < &two {
        return Ok(two);
    }

    let mut candidate = first_candidate_above(target, &two).ok_or_else(overflow)?;
    for _ in 0..max_steps {
        if is_prime(&candidate) {
            return Ok(candidate);
        }
        trace!(%candidate, "composite, stepping up");
        candidate = candidate.checked_add(&two).ok_or_else(overflow)?;
    }
    Err(Error::SearchExhausted {
        start: target.to_string(),
        steps: max_steps,
    })
}

/// Same as [prev_prime], but fails with [Error::SearchExhausted] after testing
/// `config.max_steps` candidates. Reaching the floor at 2 is not a failure.
pub fn prev_prime_with<T: SemiprimeBase>(target: &T, config: &SearchConfig) -> Result<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let max_steps = match config.max_steps {
        Some(m) => m,
        None => return Ok(prev_prime(target)),
    };

    let two = T::one() + T::one();
    if target <= &(&two + T::one()) {
        return Ok(two);
    }

    let mut candidate = if target.is_even() {
        target - T::one()
    } else {
        target - &two
    };
    for _ in 0..max_steps {
        if candidate <= two || is_prime(&candidate) {
            return Ok(candidate);
        }
        trace!(%candidate, "composite, stepping down");
        candidate = candidate - &two;
    }
    Err(Error::SearchExhausted {
        start: target.to_string(),
        steps: max_steps,
    })
}
