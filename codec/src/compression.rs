//! Point compression: (x, y) to (parity of y, x) and back.

use curve::{AffinePoint, CurveParams};
use log::debug;
use numtheory::{BigIntegerArithmetic, NumberTheory};
use serde::{Deserialize, Serialize};

use crate::constants::{TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD};
use crate::errors::CodecError;

/// Parity of a y-coordinate, carried by the SEC1 prefix byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parity {
    /// y is even, prefix `0x02`
    Even,
    /// y is odd, prefix `0x03`
    Odd,
}

impl Parity {
    /// Parity of `value`.
    #[inline]
    pub fn of<A: BigIntegerArithmetic>(value: &A::Int, math: &A) -> Self {
        if math.is_even(value) {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The SEC1 prefix byte for this parity.
    #[inline]
    pub fn prefix(self) -> u8 {
        match self {
            Parity::Even => TAG_COMPRESSED_EVEN,
            Parity::Odd => TAG_COMPRESSED_ODD,
        }
    }

    /// Parse a compressed-point prefix byte.
    pub fn from_prefix(prefix: u8) -> Result<Self, CodecError> {
        match prefix {
            TAG_COMPRESSED_EVEN => Ok(Parity::Even),
            TAG_COMPRESSED_ODD => Ok(Parity::Odd),
            other => Err(CodecError::InvalidPrefix(other)),
        }
    }
}

/// A compressed curve point: the parity of y plus the x-coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompressedPoint<I> {
    /// Parity of the y-coordinate
    pub parity: Parity,
    /// The x-coordinate, in [0, prime)
    pub x: I,
}

impl<I> CompressedPoint<I> {
    /// Pair an x-coordinate with the parity of its y.
    pub fn new(parity: Parity, x: I) -> Self {
        CompressedPoint { parity, x }
    }
}

/// Compresses and decompresses points on any short Weierstrass curve.
///
/// The codec owns a [`NumberTheory`] handle and is otherwise stateless, so one instance can
/// serve every curve and every thread.
///
/// # Example
///
/// ```
/// use codec::{Parity, PointCodec};
/// use curve::CurveParams;
/// use numtheory::BigUintArithmetic;
///
/// let codec = PointCodec::new(BigUintArithmetic);
/// let curve = CurveParams::secp256k1(codec.math()).expect("secp256k1");
///
/// let compressed = codec.compress(&curve.generator, &curve);
/// assert_eq!(compressed.parity, Parity::Even);
///
/// let point = codec.decompress(&compressed, &curve).expect("valid point");
/// assert_eq!(point, curve.generator);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PointCodec<A> {
    theory: NumberTheory<A>,
}

impl<A: BigIntegerArithmetic> PointCodec<A> {
    /// Create a codec over the given arithmetic provider.
    pub fn new(math: A) -> Self {
        Self::with_number_theory(NumberTheory::new(math))
    }

    /// Create a codec around a preconfigured [`NumberTheory`] handle.
    pub fn with_number_theory(theory: NumberTheory<A>) -> Self {
        Self { theory }
    }

    /// The number-theory layer used for square roots.
    #[inline]
    pub fn theory(&self) -> &NumberTheory<A> {
        &self.theory
    }

    /// Shorthand for `self.theory().math()`.
    #[inline]
    pub fn math(&self) -> &A {
        self.theory.math()
    }

    /// Compress a point to its x-coordinate and the parity of y.
    pub fn compress(
        &self,
        point: &AffinePoint<A::Int>,
        _curve: &CurveParams<A::Int>,
    ) -> CompressedPoint<A::Int> {
        CompressedPoint {
            parity: Parity::of(&point.y, self.math()),
            x: point.x.clone(),
        }
    }

    /// Recover the full point from a compressed one.
    ///
    /// Solves `y^2 = x^3 + a*x + b` for y and picks the root with the requested parity. The
    /// result always satisfies the curve equation.
    ///
    /// # Errors
    ///
    /// - [`CodecError::CoordinateOutOfRange`] if `x >= prime`.
    /// - [`CodecError::NumberTheory`] with [`numtheory::NumberTheoryError::NoSquareRoot`] if no
    ///   point on the curve has this x-coordinate.
    /// - [`CodecError::ParityUnavailable`] if the only point has `y = 0` and odd parity was
    ///   requested.
    pub fn decompress(
        &self,
        compressed: &CompressedPoint<A::Int>,
        curve: &CurveParams<A::Int>,
    ) -> Result<AffinePoint<A::Int>, CodecError> {
        let math = self.math();
        let p = &curve.prime;
        if math.cmp(&compressed.x, p).is_ge() {
            return Err(CodecError::CoordinateOutOfRange);
        }

        let rhs = curve.evaluate_rhs(&compressed.x, math);
        let y0 = self.theory.square_root_mod_p(&rhs, p).map_err(|err| {
            debug!("{}: x has no square root on the curve: {}", curve.name, err);
            err
        })?;

        let y = if Parity::of(&y0, math) == compressed.parity {
            y0
        } else if math.is_zero(&y0) {
            return Err(CodecError::ParityUnavailable);
        } else {
            math.sub(p, &y0)
        };

        Ok(AffinePoint::new(compressed.x.clone(), y))
    }
}
