//! Quadratic-residue classification: Legendre and Jacobi symbols.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::arithmetic::BigIntegerArithmetic;
use crate::errors::NumberTheoryError;
use crate::theory::NumberTheory;

/// Outcome of Euler's criterion for `a` modulo an odd prime `p`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuadraticResidue {
    /// `a ≡ 0 (mod p)`.
    Zero,
    /// `a` has a square root modulo `p`.
    Residue,
    /// `a` has no square root modulo `p`.
    NonResidue,
}

impl QuadraticResidue {
    /// The Legendre symbol as 0, 1 or -1.
    #[inline]
    pub fn legendre_symbol(self) -> i8 {
        match self {
            QuadraticResidue::Zero => 0,
            QuadraticResidue::Residue => 1,
            QuadraticResidue::NonResidue => -1,
        }
    }
}

impl<A: BigIntegerArithmetic> NumberTheory<A> {
    /// Classify `a` modulo the odd prime `p` using Euler's criterion.
    ///
    /// Computes `legendre = a^((p-1)/2) mod p`. A result outside `{0, 1, p-1}` proves `p` is
    /// composite and is reported as [`NumberTheoryError::CompositeModulus`].
    pub fn classify_residue(
        &self,
        a: &A::Int,
        p: &A::Int,
    ) -> Result<QuadraticResidue, NumberTheoryError> {
        self.check_odd_modulus(p)?;
        let math = self.math();
        let one = math.from_u64(1);
        let p_minus_one = math.sub(p, &one);
        let exponent = math.div(&p_minus_one, &math.from_u64(2));
        let legendre = math.pow_mod(&math.modulo(a, p), &exponent, p);

        if math.is_zero(&legendre) {
            Ok(QuadraticResidue::Zero)
        } else if math.equals(&legendre, &one) {
            Ok(QuadraticResidue::Residue)
        } else if math.equals(&legendre, &p_minus_one) {
            Ok(QuadraticResidue::NonResidue)
        } else {
            debug!("euler criterion gave {:?} modulo {:?}", legendre, p);
            Err(NumberTheoryError::CompositeModulus)
        }
    }

    /// Jacobi symbol `(a / n)` for an odd modulus `n >= 3`.
    ///
    /// Agrees with the Legendre symbol when `n` is prime. For composite `n` a value of 1 does
    /// not imply that `a` is a square.
    pub fn jacobi_symbol(&self, a: &A::Int, n: &A::Int) -> Result<i8, NumberTheoryError> {
        self.check_odd_modulus(n)?;
        let math = self.math();
        let one = math.from_u64(1);
        let two = math.from_u64(2);
        let three = math.from_u64(3);
        let four = math.from_u64(4);
        let five = math.from_u64(5);
        let eight = math.from_u64(8);

        let mut a = math.modulo(a, n);
        let mut n = n.clone();
        let mut result = 1i8;

        while !math.is_zero(&a) {
            while math.is_even(&a) {
                a = math.div(&a, &two);
                let r = math.modulo(&n, &eight);
                if math.equals(&r, &three) || math.equals(&r, &five) {
                    result = -result;
                }
            }
            core::mem::swap(&mut a, &mut n);
            if math.equals(&math.modulo(&a, &four), &three)
                && math.equals(&math.modulo(&n, &four), &three)
            {
                result = -result;
            }
            a = math.modulo(&a, &n);
        }

        if math.equals(&n, &one) {
            Ok(result)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigUintArithmetic, NativeArithmetic};

    #[test]
    fn test_classify_small_prime() {
        let theory = NumberTheory::new(NativeArithmetic);
        assert_eq!(theory.classify_residue(&4, &13), Ok(QuadraticResidue::Residue));
        assert_eq!(
            theory.classify_residue(&2, &13),
            Ok(QuadraticResidue::NonResidue)
        );
        assert_eq!(theory.classify_residue(&0, &13), Ok(QuadraticResidue::Zero));
        assert_eq!(theory.classify_residue(&26, &13), Ok(QuadraticResidue::Zero));
        // 17 ≡ 4 (mod 13)
        assert_eq!(
            theory.classify_residue(&17, &13),
            Ok(QuadraticResidue::Residue)
        );
    }

    #[test]
    fn test_classify_counts_half_residues() {
        let theory = NumberTheory::new(NativeArithmetic);
        let p = 1009u128;
        let residues = (1..p)
            .filter(|a| theory.classify_residue(a, &p) == Ok(QuadraticResidue::Residue))
            .count();
        assert_eq!(residues as u128, (p - 1) / 2);
    }

    #[test]
    fn test_classify_detects_composite() {
        let theory = NumberTheory::new(NativeArithmetic);
        // 2^7 mod 15 = 8, which is neither 1 nor 14.
        assert_eq!(
            theory.classify_residue(&2, &15),
            Err(NumberTheoryError::CompositeModulus)
        );
        assert_eq!(
            theory.classify_residue(&2, &16),
            Err(NumberTheoryError::InvalidModulus)
        );
    }

    #[test]
    fn test_legendre_symbol_values() {
        assert_eq!(QuadraticResidue::Zero.legendre_symbol(), 0);
        assert_eq!(QuadraticResidue::Residue.legendre_symbol(), 1);
        assert_eq!(QuadraticResidue::NonResidue.legendre_symbol(), -1);
    }

    #[test]
    fn test_jacobi_matches_legendre_for_primes() {
        let theory = NumberTheory::new(BigUintArithmetic);
        let math = theory.math();
        for p in [3u64, 5, 7, 13, 97, 7681] {
            let p = math.from_u64(p);
            for a in 0..60u64 {
                let a = math.from_u64(a);
                let legendre = theory.classify_residue(&a, &p).expect("prime");
                assert_eq!(
                    theory.jacobi_symbol(&a, &p),
                    Ok(legendre.legendre_symbol())
                );
            }
        }
    }

    #[test]
    fn test_jacobi_composite() {
        let theory = NumberTheory::new(NativeArithmetic);
        // (2/15) = (2/3)(2/5) = (-1)(-1) = 1, yet 2 is not a square mod 15.
        assert_eq!(theory.jacobi_symbol(&2, &15), Ok(1));
        // (7/15) = (7/3)(7/5) = (1/3)(2/5) = -1
        assert_eq!(theory.jacobi_symbol(&7, &15), Ok(-1));
        assert_eq!(theory.jacobi_symbol(&6, &15), Ok(0));
        assert_eq!(
            theory.jacobi_symbol(&3, &10),
            Err(NumberTheoryError::InvalidModulus)
        );
    }
}
