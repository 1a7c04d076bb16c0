//! Error types for the number-theory layer.

use thiserror::Error;

/// Errors returned by [`NumberTheory`](crate::NumberTheory) operations.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum NumberTheoryError {
    /// The value is a quadratic non-residue modulo the prime, so no square root exists.
    ///
    /// This is a property of the inputs, never a transient condition. Retrying with the
    /// same inputs always fails the same way.
    #[error("no square root exists for this residue")]
    NoSquareRoot,
    /// The modulus is smaller than 3 or even.
    #[error("modulus must be an odd integer greater than 2")]
    InvalidModulus,
    /// The modulus passed the cheap checks but behaved like a composite number.
    ///
    /// Raised when Euler's criterion yields something other than 0, 1 or p - 1, when the
    /// non-residue search runs out of candidates, or when Tonelli-Shanks fails to converge.
    /// All of these mean the caller broke the "p is an odd prime" contract.
    #[error("modulus is not prime")]
    CompositeModulus,
    /// The configured non-residue search limit was reached.
    #[error("no quadratic non-residue found after {tried} candidates")]
    NonResidueSearchExhausted { tried: u64 },
    /// The value has no inverse modulo the given modulus.
    #[error("value is not invertible modulo the given modulus")]
    NotInvertible,
}

/// Errors produced when importing integers into an arithmetic provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The string contained characters that are not digits in the requested radix.
    #[error("invalid digits for radix {radix}: {input:?}")]
    InvalidDigits { input: String, radix: u32 },
    /// The value does not fit the provider's integer type.
    #[error("value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}
