//! Short Weierstrass curve parameters and affine points over prime fields.
//!
//! This crate provides the curve-parameter provider consumed by the point codec:
//! [`CurveParams`] (prime, coefficients, base point) with secp256k1 and secp256r1 built in,
//! and the [`AffinePoint`] value type with an on-curve check. Point arithmetic is not part
//! of this crate. Everything is generic over a [`numtheory::BigIntegerArithmetic`] provider.

mod affine;
mod params;

pub use affine::AffinePoint;
pub use params::CurveParams;
