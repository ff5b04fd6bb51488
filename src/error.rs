//! Error type shared by the searches, the constructors and the report

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a semiprime needs a positive digit count, got {0}")]
    InvalidDigitCount(usize),

    /// 10^digits does not fit in the integer type used for the search
    #[error("10^{digits} exceeds the capacity of the integer type")]
    CapacityExceeded { digits: usize },

    #[error("{p} × {q} overflows the integer type")]
    Overflow { p: String, q: String },

    #[error("prime search from {start} gave up after {steps} candidates")]
    SearchExhausted { start: String, steps: usize },

    #[error("prime search from {start} ran past the capacity of the integer type")]
    SearchOverflow { start: String },

    #[error("could not fit a {digits}-digit product after {steps} adjustments")]
    AdjustmentsExhausted { digits: usize, steps: usize },

    #[error("{p} × {q} = {product}, not {expected}")]
    FactorMismatch {
        p: String,
        q: String,
        product: String,
        expected: String,
    },

    #[error("{value} has {actual} digits, not {expected}")]
    DigitMismatch {
        value: String,
        actual: usize,
        expected: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
