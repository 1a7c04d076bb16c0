//! Arbitrary-precision provider backed by `num-bigint`.

use core::cmp::Ordering;

use num_bigint::BigUint;
use num_traits::{Num, Zero};

use crate::arithmetic::BigIntegerArithmetic;
use crate::errors::ArithmeticError;

/// Software bignum arithmetic over [`BigUint`].
///
/// This is the provider to use for real curve moduli (256 bits and up).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BigUintArithmetic;

impl BigIntegerArithmetic for BigUintArithmetic {
    type Int = BigUint;

    #[inline]
    fn from_u64(&self, value: u64) -> BigUint {
        BigUint::from(value)
    }

    #[inline]
    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a + b
    }

    #[inline]
    fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a - b
    }

    #[inline]
    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a * b
    }

    #[inline]
    fn div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        a / b
    }

    #[inline]
    fn modulo(&self, a: &BigUint, modulus: &BigUint) -> BigUint {
        a % modulus
    }

    #[inline]
    fn pow_mod(&self, base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        base.modpow(exponent, modulus)
    }

    fn mod_inverse(&self, a: &BigUint, modulus: &BigUint) -> Option<BigUint> {
        if modulus.is_zero() {
            return None;
        }
        a.modinv(modulus)
    }

    #[inline]
    fn cmp(&self, a: &BigUint, b: &BigUint) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_zero(&self, a: &BigUint) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_even(&self, a: &BigUint) -> bool {
        !a.bit(0)
    }

    fn from_str_radix(&self, digits: &str, radix: u32) -> Result<BigUint, ArithmeticError> {
        BigUint::from_str_radix(digits, radix).map_err(|_| ArithmeticError::InvalidDigits {
            input: digits.to_string(),
            radix,
        })
    }

    fn to_str_radix(&self, a: &BigUint, radix: u32) -> String {
        a.to_str_radix(radix)
    }

    fn from_bytes_be(&self, bytes: &[u8]) -> Result<BigUint, ArithmeticError> {
        Ok(BigUint::from_bytes_be(bytes))
    }

    fn to_bytes_be(&self, a: &BigUint) -> Vec<u8> {
        a.to_bytes_be()
    }
}
