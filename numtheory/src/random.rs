use rand::Rng;

use crate::arithmetic::BigIntegerArithmetic;

/// Helper trait for sampling integers below a bound with any arithmetic provider.
pub trait RandomInteger: BigIntegerArithmetic {
    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn random_below<R: Rng + ?Sized>(&self, bound: &Self::Int, rng: &mut R) -> Self::Int;
}

impl<A: BigIntegerArithmetic> RandomInteger for A {
    fn random_below<R: Rng + ?Sized>(&self, bound: &Self::Int, rng: &mut R) -> Self::Int {
        let template = self.to_bytes_be(bound);
        let mask = 0xffu8 >> template[0].leading_zeros();
        let mut bytes = vec![0u8; template.len()];

        loop {
            rng.fill(&mut bytes[..]);
            bytes[0] &= mask;
            if let Ok(value) = self.from_bytes_be(&bytes) {
                if self.cmp(&value, bound).is_lt() {
                    return value;
                }
            }
        }
    }
}
