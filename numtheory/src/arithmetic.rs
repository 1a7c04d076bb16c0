//! Integer arithmetic capability consumed by the number-theory layer.

use core::cmp::Ordering;
use core::fmt::Debug;

use crate::errors::ArithmeticError;

/// Exact integer arithmetic over non-negative integers.
///
/// Everything in this workspace is generic over this trait rather than over a concrete
/// integer type, so a software bignum and a machine-word backend can be swapped freely.
/// Implementations are stateless values and are passed explicitly to each call site.
///
/// Domains follow the usual integer rules: `sub` requires `a >= b`, `div` and `modulo`
/// require a non-zero divisor, and `pow_mod` requires a non-zero modulus. Violating them
/// panics the same way the underlying integer type does.
pub trait BigIntegerArithmetic {
    /// Integer representation handled by this provider.
    type Int: Clone + Debug + PartialEq + Eq;

    fn from_u64(&self, value: u64) -> Self::Int;

    fn add(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    fn sub(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    fn mul(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Truncating division.
    fn div(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;

    /// Remainder of `a` divided by `modulus`, always in `[0, modulus)`.
    fn modulo(&self, a: &Self::Int, modulus: &Self::Int) -> Self::Int;

    /// `base^exponent mod modulus`.
    fn pow_mod(&self, base: &Self::Int, exponent: &Self::Int, modulus: &Self::Int) -> Self::Int;

    /// Multiplicative inverse of `a` modulo `modulus`, if `gcd(a, modulus) == 1`.
    fn mod_inverse(&self, a: &Self::Int, modulus: &Self::Int) -> Option<Self::Int>;

    fn cmp(&self, a: &Self::Int, b: &Self::Int) -> Ordering;

    #[inline]
    fn equals(&self, a: &Self::Int, b: &Self::Int) -> bool {
        self.cmp(a, b) == Ordering::Equal
    }

    #[inline]
    fn is_zero(&self, a: &Self::Int) -> bool {
        self.equals(a, &self.from_u64(0))
    }

    #[inline]
    fn is_even(&self, a: &Self::Int) -> bool {
        self.is_zero(&self.modulo(a, &self.from_u64(2)))
    }

    /// Parse an integer written in `radix` (2..=36), without sign or prefix.
    fn from_str_radix(&self, digits: &str, radix: u32) -> Result<Self::Int, ArithmeticError>;

    /// Lowercase digits in `radix`, without leading zeros (`"0"` for zero).
    fn to_str_radix(&self, a: &Self::Int, radix: u32) -> String;

    /// Import a big-endian unsigned byte string.
    fn from_bytes_be(&self, bytes: &[u8]) -> Result<Self::Int, ArithmeticError>;

    /// Minimal big-endian bytes (`[0]` for zero).
    fn to_bytes_be(&self, a: &Self::Int) -> Vec<u8>;

    /// Whether modular operations with this modulus stay exact in this provider.
    #[inline]
    fn supports_modulus(&self, _modulus: &Self::Int) -> bool {
        true
    }
}
