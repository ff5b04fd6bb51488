use crate::error::Result;
use crate::semiprime::Semiprime;
use core::fmt::Display;
use num_integer::{Integer, Roots};
use num_traits::{CheckedAdd, CheckedMul, NumRef, RefNum};

/// Limits applied to the otherwise unbounded search loops.
///
/// The searches walk odd candidates one by one, and the constructors keep
/// nudging the cofactor until the product has the wanted size. Neither loop
/// has a natural end for pathological input, so both can be capped here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of candidates tested by a single prime search.
    /// None means the search runs until a prime is found.
    pub max_steps: Option<usize>,

    /// Maximum number of cofactor corrections (shrink and grow steps together)
    /// a constructor may take. None means no limit.
    pub max_adjustments: Option<usize>,
}

impl SearchConfig {
    /// Configuration without any guard, the searches never give up
    pub fn unbounded() -> Self {
        Self {
            max_steps: None,
            max_adjustments: None,
        }
    }

    /// Create a configuration from command line style limits, where 0 disables a guard
    pub fn from_limits(max_steps: usize, max_adjustments: usize) -> Self {
        Self {
            max_steps: Some(max_steps).filter(|&s| s > 0),
            max_adjustments: Some(max_adjustments).filter(|&s| s > 0),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        // caps for runaway loops only: a search below 2^64 never tests more
        // than 800 candidates, and a cofactor fit takes a handful of steps
        Self {
            max_steps: Some(1 << 20),
            max_adjustments: Some(1 << 10),
        }
    }
}

/// Size of an integer measured in decimal digits
pub trait DecimalDigits: Sized {
    /// Number of characters in the base 10 rendering (`0` has one digit)
    fn decimal_digits(&self) -> usize;

    /// Return 10^exp, or None if it can't be represented by the type
    fn checked_pow10(exp: usize) -> Option<Self>;
}

/// Integer types the prime searches and semiprime constructors work on
pub trait SemiprimeBase:
    Integer + Roots + NumRef + Clone + CheckedAdd + CheckedMul + Display + DecimalDigits
{
}
impl<T> SemiprimeBase for T where
    T: Integer + Roots + NumRef + Clone + CheckedAdd + CheckedMul + Display + DecimalDigits
{
}

/// Arithmetic on references to a [SemiprimeBase] integer
pub trait SemiprimeRefBase<Base>: RefNum<Base> {}
impl<T, Base> SemiprimeRefBase<Base> for T where T: RefNum<Base> {}

/// Generate random primes and semiprimes of an exact decimal size.
///
/// Only the starting points are random, primality is still decided by
/// deterministic trial division.
pub trait RandSemiprime<T> {
    /// Generate a random prime with exactly `digits` decimal digits
    fn gen_prime_digits(&mut self, digits: usize, config: Option<SearchConfig>) -> Result<T>;

    /// Generate a random semiprime with exactly `digits` decimal digits. The
    /// first factor has `digits / 2` digits (at least one), and the second
    /// factor is sized to fill the rest.
    fn gen_semiprime(
        &mut self,
        digits: usize,
        config: Option<SearchConfig>,
    ) -> Result<Semiprime<T>>;
}
