//! Generate semiprimes of an exact decimal size as test inputs for integer
//! factorization, e.g. a general number field sieve.
//!
//! Primality is decided deterministically by trial division, so the crate is
//! meant for factors up to about 10^8 and products up to 15 or so digits.
//! All functions are generic over the primitive unsigned integers and, with
//! the `big-int` feature, [num_bigint::BigUint].
//!
//! ```
//! use num_semiprime::{generate_semiprime, find_semiprimes_in_range};
//!
//! let s = generate_semiprime::<u64>(8, None).unwrap();
//! assert_eq!((s.p, s.q, s.n), (10007, 9973, 99799811));
//!
//! let found = find_semiprimes_in_range(&100_000_000u64, &999_999_999, 3, None).unwrap();
//! assert!(found.iter().all(|s| s.check(9).is_ok()));
//! ```

mod error;
mod integer;
mod primality;
mod rand;
mod semiprime;
mod traits;

pub mod nt_funcs;
pub mod report;

pub use error::{Error, Result};
pub use primality::{is_prime, smallest_factor};
pub use semiprime::{find_semiprimes_in_range, generate_semiprime, Semiprime};
pub use traits::{DecimalDigits, RandSemiprime, SearchConfig, SemiprimeBase, SemiprimeRefBase};
