// secp256k1: y^2 = x^3 + 7 over GF(2^256 - 2^32 - 977), p ≡ 3 (mod 4)
// secp256r1: y^2 = x^3 - 3x + b over GF(2^256 - 2^224 + 2^192 + 2^96 - 1), p ≡ 3 (mod 4)
// Constants are the SEC 2 v2 domain parameters, big-endian.

use numtheory::{ArithmeticError, BigIntegerArithmetic};
use serde::{Deserialize, Serialize};

use crate::affine::AffinePoint;

#[rustfmt::skip]
const SECP256K1_P: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];
#[rustfmt::skip]
const SECP256K1_GX: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac,
    0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9,
    0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];
#[rustfmt::skip]
const SECP256K1_GY: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65,
    0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19,
    0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

#[rustfmt::skip]
const SECP256R1_P: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];
#[rustfmt::skip]
const SECP256R1_A: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc,
];
#[rustfmt::skip]
const SECP256R1_B: [u8; 32] = [
    0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7,
    0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86, 0xbc,
    0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6,
    0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2, 0x60, 0x4b,
];
#[rustfmt::skip]
const SECP256R1_GX: [u8; 32] = [
    0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47,
    0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40, 0xf2,
    0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0,
    0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98, 0xc2, 0x96,
];
#[rustfmt::skip]
const SECP256R1_GY: [u8; 32] = [
    0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b,
    0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f, 0x9e, 0x16,
    0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce,
    0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf, 0x51, 0xf5,
];

/// Short Weierstrass curve `y^2 = x^3 + a*x + b` over the prime field `GF(prime)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams<I> {
    /// Human-readable curve name
    pub name: String,
    /// The field modulus
    pub prime: I,
    /// The 'a' coefficient, reduced into [0, prime)
    pub a: I,
    /// The 'b' coefficient, reduced into [0, prime)
    pub b: I,
    /// Base point
    pub generator: AffinePoint<I>,
}

impl<I: Clone> CurveParams<I> {
    /// Describe a custom curve. Coefficients must already be reduced modulo `prime`.
    pub fn new(
        name: impl Into<String>,
        prime: I,
        a: I,
        b: I,
        generator: AffinePoint<I>,
    ) -> Self {
        CurveParams {
            name: name.into(),
            prime,
            a,
            b,
            generator,
        }
    }

    /// secp256k1 (a = 0, b = 7).
    ///
    /// Fails only if the provider cannot hold 256-bit integers.
    pub fn secp256k1<A>(math: &A) -> Result<Self, ArithmeticError>
    where
        A: BigIntegerArithmetic<Int = I>,
    {
        Ok(Self::new(
            "secp256k1",
            math.from_bytes_be(&SECP256K1_P)?,
            math.from_u64(0),
            math.from_u64(7),
            AffinePoint::new(
                math.from_bytes_be(&SECP256K1_GX)?,
                math.from_bytes_be(&SECP256K1_GY)?,
            ),
        ))
    }

    /// secp256r1, also known as NIST P-256 (a = -3).
    ///
    /// Fails only if the provider cannot hold 256-bit integers.
    pub fn secp256r1<A>(math: &A) -> Result<Self, ArithmeticError>
    where
        A: BigIntegerArithmetic<Int = I>,
    {
        Ok(Self::new(
            "secp256r1",
            math.from_bytes_be(&SECP256R1_P)?,
            math.from_bytes_be(&SECP256R1_A)?,
            math.from_bytes_be(&SECP256R1_B)?,
            AffinePoint::new(
                math.from_bytes_be(&SECP256R1_GX)?,
                math.from_bytes_be(&SECP256R1_GY)?,
            ),
        ))
    }

    /// Width of an encoded coordinate in bytes.
    pub fn field_size<A>(&self, math: &A) -> usize
    where
        A: BigIntegerArithmetic<Int = I>,
    {
        math.to_bytes_be(&self.prime).len()
    }

    /// Right-hand side of the curve equation, `(x^3 + a*x + b) mod prime`.
    pub fn evaluate_rhs<A>(&self, x: &I, math: &A) -> I
    where
        A: BigIntegerArithmetic<Int = I>,
    {
        let p = &self.prime;
        let x = math.modulo(x, p);
        let x3 = math.pow_mod(&x, &math.from_u64(3), p);
        let ax = math.modulo(&math.mul(&self.a, &x), p);
        math.modulo(&math.add(&math.add(&x3, &ax), &self.b), p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numtheory::{BigUint, BigUintArithmetic, NativeArithmetic};

    #[test]
    fn test_secp256k1_params() {
        let math = BigUintArithmetic;
        let curve = CurveParams::secp256k1(&math).expect("params");
        assert_eq!(curve.name, "secp256k1");
        assert_eq!(curve.field_size(&math), 32);
        assert_eq!(
            math.to_str_radix(&curve.prime, 16),
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
        );
        assert_eq!(curve.a, BigUint::from(0u32));
        assert_eq!(curve.b, BigUint::from(7u32));
    }

    #[test]
    fn test_secp256r1_a_is_minus_three() {
        let math = BigUintArithmetic;
        let curve = CurveParams::secp256r1(&math).expect("params");
        assert_eq!(
            math.add(&curve.a, &math.from_u64(3)),
            curve.prime
        );
    }

    #[test]
    fn test_native_provider_cannot_hold_256_bits() {
        assert!(CurveParams::secp256k1(&NativeArithmetic).is_err());
    }

    #[test]
    fn test_evaluate_rhs_small_curve() {
        let math = NativeArithmetic;
        let curve = CurveParams::new("toy", 13u128, 0, 7, AffinePoint::new(7, 5));
        // 7^3 + 7 = 350 ≡ 12 (mod 13)
        assert_eq!(curve.evaluate_rhs(&7, &math), 12);
        assert_eq!(curve.evaluate_rhs(&20, &math), 12);
        assert_eq!(curve.field_size(&math), 1);
    }
}
