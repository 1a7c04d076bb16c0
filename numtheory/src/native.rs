//! Machine-word provider for moduli below 2^64.

use core::cmp::Ordering;
use core::num::IntErrorKind;

use crate::arithmetic::BigIntegerArithmetic;
use crate::errors::ArithmeticError;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Native integer arithmetic with `u128` storage.
///
/// Moduli must stay below 2^64 so that the product of two reduced values fits in a `u128`.
/// Imports reject anything wider than 64 bits, and [`NumberTheory`](crate::NumberTheory)
/// refuses wider moduli through [`BigIntegerArithmetic::supports_modulus`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NativeArithmetic;

impl BigIntegerArithmetic for NativeArithmetic {
    type Int = u128;

    #[inline]
    fn from_u64(&self, value: u64) -> u128 {
        value as u128
    }

    #[inline]
    fn add(&self, a: &u128, b: &u128) -> u128 {
        a + b
    }

    #[inline]
    fn sub(&self, a: &u128, b: &u128) -> u128 {
        a - b
    }

    #[inline]
    fn mul(&self, a: &u128, b: &u128) -> u128 {
        a * b
    }

    #[inline]
    fn div(&self, a: &u128, b: &u128) -> u128 {
        a / b
    }

    #[inline]
    fn modulo(&self, a: &u128, modulus: &u128) -> u128 {
        a % modulus
    }

    fn pow_mod(&self, base: &u128, exponent: &u128, modulus: &u128) -> u128 {
        if *modulus == 1 {
            return 0;
        }
        let mut result = 1u128;
        let mut base = base % modulus;
        let mut bits = *exponent;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result * base % modulus;
            }
            base = base * base % modulus;
            bits >>= 1;
        }

        result
    }

    fn mod_inverse(&self, a: &u128, modulus: &u128) -> Option<u128> {
        if *modulus == 0 {
            return None;
        }
        let m = *modulus as i128;
        let (mut old_r, mut r) = ((*a % *modulus) as i128, m);
        let (mut old_s, mut s) = (1i128, 0i128);

        while r != 0 {
            let q = old_r / r;
            (old_r, r) = (r, old_r - q * r);
            (old_s, s) = (s, old_s - q * s);
        }

        if old_r != 1 {
            return None;
        }
        Some(old_s.rem_euclid(m) as u128)
    }

    #[inline]
    fn cmp(&self, a: &u128, b: &u128) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_zero(&self, a: &u128) -> bool {
        *a == 0
    }

    #[inline]
    fn is_even(&self, a: &u128) -> bool {
        a & 1 == 0
    }

    fn from_str_radix(&self, digits: &str, radix: u32) -> Result<u128, ArithmeticError> {
        u64::from_str_radix(digits, radix)
            .map(u128::from)
            .map_err(|err| match err.kind() {
                IntErrorKind::PosOverflow => ArithmeticError::Overflow { bits: u64::BITS },
                _ => ArithmeticError::InvalidDigits {
                    input: digits.to_string(),
                    radix,
                },
            })
    }

    fn to_str_radix(&self, a: &u128, radix: u32) -> String {
        let radix = radix as u128;
        let mut value = *a;
        let mut out = Vec::new();
        loop {
            out.push(DIGITS[(value % radix) as usize]);
            value /= radix;
            if value == 0 {
                break;
            }
        }
        out.reverse();
        String::from_utf8_lossy(&out).into_owned()
    }

    fn from_bytes_be(&self, bytes: &[u8]) -> Result<u128, ArithmeticError> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[start..];
        if significant.len() > 8 {
            return Err(ArithmeticError::Overflow { bits: u64::BITS });
        }
        Ok(significant
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128))
    }

    fn to_bytes_be(&self, a: &u128) -> Vec<u8> {
        let bytes = a.to_be_bytes();
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len() - 1);
        bytes[start..].to_vec()
    }

    #[inline]
    fn supports_modulus(&self, modulus: &u128) -> bool {
        *modulus <= u64::MAX as u128
    }
}
