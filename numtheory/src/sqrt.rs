//! Modular square roots: the p ≡ 3 (mod 4) shortcut and Tonelli-Shanks.

use log::trace;

use crate::arithmetic::BigIntegerArithmetic;
use crate::errors::NumberTheoryError;
use crate::residue::QuadraticResidue;
use crate::theory::NumberTheory;

impl<A: BigIntegerArithmetic> NumberTheory<A> {
    /// Square root of `a` modulo the odd prime `p`.
    ///
    /// `a` may be any non-negative integer; it is reduced modulo `p` first. Of the two roots
    /// `r` and `p - r` the smaller one is returned, so identical inputs always produce the
    /// identical root. Callers wanting the other root compute `p - r`.
    ///
    /// # Errors
    ///
    /// - [`NumberTheoryError::NoSquareRoot`] if `a` is a quadratic non-residue.
    /// - [`NumberTheoryError::InvalidModulus`] if `p` is even or smaller than 3.
    /// - [`NumberTheoryError::CompositeModulus`] or
    ///   [`NumberTheoryError::NonResidueSearchExhausted`] if `p` is not actually prime or the
    ///   configured search limit was hit.
    pub fn square_root_mod_p(&self, a: &A::Int, p: &A::Int) -> Result<A::Int, NumberTheoryError> {
        self.check_odd_modulus(p)?;
        let math = self.math();
        let a = math.modulo(a, p);
        if math.is_zero(&a) {
            return Ok(a);
        }

        match self.classify_residue(&a, p)? {
            QuadraticResidue::NonResidue => return Err(NumberTheoryError::NoSquareRoot),
            QuadraticResidue::Zero => return Ok(math.from_u64(0)),
            QuadraticResidue::Residue => {}
        }

        let four = math.from_u64(4);
        let root = if math.equals(&math.modulo(p, &four), &math.from_u64(3)) {
            let exponent = math.div(&math.add(p, &math.from_u64(1)), &four);
            math.pow_mod(&a, &exponent, p)
        } else {
            self.tonelli_shanks(&a, p)?
        };

        if !math.equals(&self.square(&root, p), &a) {
            return Err(NumberTheoryError::CompositeModulus);
        }

        let other = math.sub(p, &root);
        if math.cmp(&other, &root).is_lt() {
            Ok(other)
        } else {
            Ok(root)
        }
    }

    /// Both square roots `(r, p - r)` of `a` modulo `p`, smaller first.
    ///
    /// For `a ≡ 0` both entries are zero.
    pub fn square_roots_mod_p(
        &self,
        a: &A::Int,
        p: &A::Int,
    ) -> Result<(A::Int, A::Int), NumberTheoryError> {
        let root = self.square_root_mod_p(a, p)?;
        let math = self.math();
        let other = if math.is_zero(&root) {
            root.clone()
        } else {
            math.sub(p, &root)
        };
        Ok((root, other))
    }

    /// Tonelli-Shanks for a non-zero residue `a` (already reduced) modulo `p ≡ 1 (mod 4)`.
    fn tonelli_shanks(&self, a: &A::Int, p: &A::Int) -> Result<A::Int, NumberTheoryError> {
        let math = self.math();
        let one = math.from_u64(1);
        let two = math.from_u64(2);

        // p - 1 = q * 2^s with q odd
        let mut q = math.sub(p, &one);
        let mut s = 0u32;
        while math.is_even(&q) {
            q = math.div(&q, &two);
            s += 1;
        }
        trace!("p - 1 = {:?} * 2^{}", q, s);

        let z = self.find_non_residue(p)?;
        trace!("using non-residue {:?}", z);

        let mut m = s;
        let mut c = math.pow_mod(&z, &q, p);
        let mut t = math.pow_mod(a, &q, p);
        let exponent = math.div(&math.add(&q, &one), &two);
        let mut root = math.pow_mod(a, &exponent, p);

        while !math.equals(&t, &one) {
            // least i in [1, m) with t^(2^i) = 1
            let mut i = 0u32;
            let mut t_pow = t.clone();
            while !math.equals(&t_pow, &one) {
                t_pow = self.square(&t_pow, p);
                i += 1;
                if i >= m {
                    return Err(NumberTheoryError::CompositeModulus);
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = self.square(&b, p);
            }

            root = math.modulo(&math.mul(&root, &b), p);
            c = self.square(&b, p);
            t = math.modulo(&math.mul(&t, &c), p);
            m = i;
            trace!("tonelli-shanks step: m = {}", m);
        }

        Ok(root)
    }

    /// Smallest quadratic non-residue modulo `p`, counting up from 2.
    fn find_non_residue(&self, p: &A::Int) -> Result<A::Int, NumberTheoryError> {
        let math = self.math();
        let one = math.from_u64(1);
        let mut candidate = math.from_u64(2);
        let mut tried = 0u64;

        loop {
            if math.cmp(&candidate, p).is_ge() {
                return Err(NumberTheoryError::CompositeModulus);
            }
            if let Some(limit) = self.search_limit() {
                if tried >= limit {
                    return Err(NumberTheoryError::NonResidueSearchExhausted { tried });
                }
            }
            if self.classify_residue(&candidate, p)? == QuadraticResidue::NonResidue {
                return Ok(candidate);
            }
            candidate = math.add(&candidate, &one);
            tried += 1;
        }
    }

    #[inline]
    fn square(&self, x: &A::Int, p: &A::Int) -> A::Int {
        let math = self.math();
        math.modulo(&math.mul(x, x), p)
    }
}
