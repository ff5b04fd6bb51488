use crate::error::{Error, Result};
use crate::nt_funcs::{next_prime_with, prev_prime_with};
use crate::semiprime::{fit_cofactor, pow10, Semiprime};
use crate::traits::{RandSemiprime, SearchConfig, SemiprimeBase, SemiprimeRefBase};
#[cfg(feature = "num-bigint")]
use num_bigint::{BigUint, RandBigInt};
use rand::Rng;

/// Draw a prime with exactly `digits` digits, using `sample(lo, hi)` to pick a
/// starting point in `[lo, hi)`
fn gen_prime_digits_by<T: SemiprimeBase, F: FnMut(&T, &T) -> T>(
    digits: usize,
    config: &SearchConfig,
    mut sample: F,
) -> Result<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    if digits == 0 {
        return Err(Error::InvalidDigitCount(digits));
    }
    let lo: T = pow10(digits - 1)?;
    let hi: T = pow10(digits)?;

    let p = next_prime_with(&sample(&lo, &hi), config)?;
    if p < hi {
        Ok(p)
    } else {
        // there is always a prime between 10^(d-1) and 10^d
        prev_prime_with(&hi, config)
    }
}

fn gen_semiprime_by<T: SemiprimeBase, F: FnMut(&T, &T) -> T>(
    digits: usize,
    config: &SearchConfig,
    mut sample: F,
) -> Result<Semiprime<T>>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    if digits < 2 {
        return Err(Error::InvalidDigitCount(digits));
    }
    let p: T = gen_prime_digits_by(usize::max(digits / 2, 1), config, &mut sample)?;

    // seed q such that p * q falls into [10^(d-1), 10^d)
    let lo = &pow10::<T>(digits - 1)? / &p + T::one();
    let hi = &pow10::<T>(digits)? / &p;
    let q = if lo < hi { sample(&lo, &hi) } else { lo };
    let q = next_prime_with(&q, config)?;

    fit_cofactor(p, q, digits, config)
}

macro_rules! impl_randsemiprime_prim {
    ($($T:ty)*) => {$(
        impl<R: Rng> RandSemiprime<$T> for R {
            #[inline]
            fn gen_prime_digits(&mut self, digits: usize, config: Option<SearchConfig>) -> Result<$T> {
                let config = config.unwrap_or_default();
                gen_prime_digits_by(digits, &config, |lo: &$T, hi: &$T| self.gen_range(*lo..*hi))
            }

            #[inline]
            fn gen_semiprime(&mut self, digits: usize, config: Option<SearchConfig>) -> Result<Semiprime<$T>> {
                let config = config.unwrap_or_default();
                gen_semiprime_by(digits, &config, |lo: &$T, hi: &$T| self.gen_range(*lo..*hi))
            }
        }
    )*}
}
impl_randsemiprime_prim!(u32 u64 u128);

#[cfg(feature = "num-bigint")]
impl<R: Rng> RandSemiprime<BigUint> for R {
    #[inline]
    fn gen_prime_digits(&mut self, digits: usize, config: Option<SearchConfig>) -> Result<BigUint> {
        let config = config.unwrap_or_default();
        gen_prime_digits_by(digits, &config, |lo: &BigUint, hi: &BigUint| {
            self.gen_biguint_range(lo, hi)
        })
    }

    #[inline]
    fn gen_semiprime(
        &mut self,
        digits: usize,
        config: Option<SearchConfig>,
    ) -> Result<Semiprime<BigUint>> {
        let config = config.unwrap_or_default();
        gen_semiprime_by(digits, &config, |lo: &BigUint, hi: &BigUint| {
            self.gen_biguint_range(lo, hi)
        })
    }
}
