//! Deterministic primality test by trial division.
//!
//! Every odd integer up to the square root is tried, which costs O(sqrt(n))
//! divisions. That is fine for factors up to roughly 10^8, the sizes the
//! semiprime constructors work with, and hopeless far beyond that.

use crate::traits::{SemiprimeBase, SemiprimeRefBase};
use num_integer::Roots;

/// Find the smallest odd divisor of `target` in `3..=isqrt(target)`
fn odd_trial_division<T: SemiprimeBase>(target: &T) -> Option<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let limit = Roots::sqrt(target);
    let two = T::one() + T::one();
    let mut divisor = &two + T::one();
    while divisor <= limit {
        if target.is_multiple_of(&divisor) {
            return Some(divisor);
        }
        divisor = divisor + &two;
    }
    None
}

/// Test whether the integer is a prime by trial division with all odd
/// numbers up to its square root.
pub fn is_prime<T: SemiprimeBase>(target: &T) -> bool
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let two = T::one() + T::one();
    if target < &two {
        return false;
    }
    if target == &two {
        return true;
    }
    if target.is_even() {
        return false;
    }
    odd_trial_division(target).is_none()
}

/// Return the least prime factor of a composite number, or None if the
/// target is a prime or smaller than 2.
pub fn smallest_factor<T: SemiprimeBase>(target: &T) -> Option<T>
where
    for<'r> &'r T: SemiprimeRefBase<T>,
{
    let two = T::one() + T::one();
    if target <= &two {
        return None;
    }
    if target.is_even() {
        return Some(two);
    }
    odd_trial_division(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "num-bigint")]
    use num_bigint::BigUint;
    use rand::random;

    const PRIME100: [u64; 25] = [
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];

    fn brute_force(n: u64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn is_prime_test() {
        for x in 0..100u64 {
            assert_eq!(PRIME100.contains(&x), is_prime(&x), "primality of {}", x);
        }

        // some known primes and composites
        assert!(is_prime(&6917u32));
        assert!(!is_prime(&6923u32)); // 7 * 23 * 43
        assert!(is_prime(&10007u32));
        assert!(is_prime(&99991u64));
        assert!(is_prime(&1000003u64));
        assert!(is_prime(&10000019u64));
        assert!(!is_prime(&47893197u64)); // 3 * 11 * 79 * 18371
        assert!(!is_prime(&(1000003u64 * 999983)));
        assert!(!is_prime(&(10007u64 * 10007))); // perfect square of a prime

        // agree with a full trial division
        for _ in 0..200 {
            let x = random::<u32>() as u64 >> (random::<u32>() % 16);
            assert_eq!(is_prime(&x), brute_force(x), "primality of {}", x);
        }
    }

    #[test]
    fn smallest_factor_test() {
        assert_eq!(smallest_factor(&0u32), None);
        assert_eq!(smallest_factor(&1u32), None);
        assert_eq!(smallest_factor(&2u32), None);
        assert_eq!(smallest_factor(&4u32), Some(2));
        assert_eq!(smallest_factor(&9u32), Some(3));
        assert_eq!(smallest_factor(&47893197u64), Some(3));
        assert_eq!(smallest_factor(&(10007u64 * 9973)), Some(9973));
        assert_eq!(smallest_factor(&10000019u64), None);

        for _ in 0..100 {
            let x = (random::<u16>() as u64) + 2;
            match smallest_factor(&x) {
                Some(f) => {
                    assert!(is_prime(&f));
                    assert_eq!(x % f, 0);
                    assert!((2..f).all(|d| x % d != 0));
                }
                None => assert!(is_prime(&x)),
            }
        }
    }

    #[cfg(feature = "num-bigint")]
    #[test]
    fn biguint_test() {
        assert!(is_prime(&BigUint::from(2u8)));
        assert!(!is_prime(&BigUint::from(1u8)));
        assert!(is_prime(&BigUint::from(999983u32)));
        assert!(!is_prime(&BigUint::from(999985999949u64)));
        assert_eq!(
            smallest_factor(&BigUint::from(999985999949u64)),
            Some(BigUint::from(999983u32))
        );
        for _ in 0..50 {
            let x = random::<u32>() as u64;
            assert_eq!(is_prime(&BigUint::from(x)), is_prime(&x));
        }
    }
}
