//! Backend implementations for integers

use crate::traits::DecimalDigits;

#[cfg(feature = "num-bigint")]
use num_bigint::BigUint;
#[cfg(feature = "num-bigint")]
use num_traits::{Pow, Zero};

macro_rules! impl_decimal_prim {
    ($($T:ty)*) => {$(
        impl DecimalDigits for $T {
            #[inline]
            fn decimal_digits(&self) -> usize {
                match self.checked_ilog10() {
                    Some(l) => l as usize + 1,
                    None => 1, // zero
                }
            }
            #[inline]
            fn checked_pow10(exp: usize) -> Option<Self> {
                let exp = u32::try_from(exp).ok()?;
                (10 as $T).checked_pow(exp)
            }
        }
    )*}
}
impl_decimal_prim!(u8 u16 u32 u64 u128 usize);

#[cfg(feature = "num-bigint")]
impl DecimalDigits for BigUint {
    fn decimal_digits(&self) -> usize {
        if self.is_zero() {
            return 1;
        }
        self.to_str_radix(10).len()
    }
    fn checked_pow10(exp: usize) -> Option<Self> {
        Some(Pow::pow(BigUint::from(10u8), exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_digits_test() {
        assert_eq!(0u8.decimal_digits(), 1);
        assert_eq!(9u8.decimal_digits(), 1);
        assert_eq!(10u8.decimal_digits(), 2);
        assert_eq!(255u8.decimal_digits(), 3);
        assert_eq!(47893197u32.decimal_digits(), 8);
        assert_eq!(999999999999u64.decimal_digits(), 12);
        assert_eq!(1000000000000u64.decimal_digits(), 13);
        assert_eq!(u64::MAX.decimal_digits(), 20);
        assert_eq!(u128::MAX.decimal_digits(), 39);

        // compare against the string rendering
        for _ in 0..100 {
            let x = rand::random::<u64>() >> (rand::random::<u32>() % 64);
            assert_eq!(x.decimal_digits(), x.to_string().len(), "digits of {}", x);
        }
    }

    #[test]
    fn pow10_test() {
        assert_eq!(u8::checked_pow10(0), Some(1));
        assert_eq!(u8::checked_pow10(2), Some(100));
        assert_eq!(u8::checked_pow10(3), None);
        assert_eq!(u64::checked_pow10(19), Some(10_000_000_000_000_000_000));
        assert_eq!(u64::checked_pow10(20), None);
        assert_eq!(u64::checked_pow10(usize::MAX), None);
        for exp in 0..19 {
            assert_eq!(u64::checked_pow10(exp).map(|v| v.decimal_digits()), Some(exp + 1));
        }
    }

    #[cfg(feature = "num-bigint")]
    #[test]
    fn biguint_test() {
        assert_eq!(BigUint::zero().decimal_digits(), 1);
        assert_eq!(BigUint::from(47893197u32).decimal_digits(), 8);

        let big = BigUint::checked_pow10(40).unwrap();
        assert_eq!(big.decimal_digits(), 41);
        assert_eq!((big - 1u8).decimal_digits(), 40);

        for _ in 0..100 {
            let x = rand::random::<u64>();
            assert_eq!(BigUint::from(x).decimal_digits(), x.decimal_digits());
        }
    }
}
