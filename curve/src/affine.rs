use numtheory::BigIntegerArithmetic;
use serde::{Deserialize, Serialize};

use crate::params::CurveParams;

/// Affine point on a short Weierstrass curve.
/// Represents a finite point (x, y); both coordinates are expected in [0, prime).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AffinePoint<I> {
    /// The x-coordinate of the point
    pub x: I,
    /// The y-coordinate of the point
    pub y: I,
}

impl<I> AffinePoint<I> {
    /// Create a new affine point.
    pub fn new(x: I, y: I) -> Self {
        AffinePoint { x, y }
    }
}

impl<I: Clone> AffinePoint<I> {
    /// Check if a point is on the curve: y^2 = x^3 + a*x + b, with reduced coordinates.
    pub fn is_on_curve<A>(&self, curve: &CurveParams<I>, math: &A) -> bool
    where
        A: BigIntegerArithmetic<Int = I>,
    {
        let p = &curve.prime;
        if math.cmp(&self.x, p).is_ge() || math.cmp(&self.y, p).is_ge() {
            return false;
        }

        let y2 = math.modulo(&math.mul(&self.y, &self.y), p);
        math.equals(&y2, &curve.evaluate_rhs(&self.x, math))
    }

    /// Negate a point: (x, p - y).
    pub fn negate<A>(&self, curve: &CurveParams<I>, math: &A) -> Self
    where
        A: BigIntegerArithmetic<Int = I>,
    {
        if math.is_zero(&self.y) {
            return self.clone();
        }
        AffinePoint::new(self.x.clone(), math.sub(&curve.prime, &self.y))
    }
}
