//! The [`NumberTheory`] handle: an arithmetic provider plus search configuration.

use log::debug;

use crate::arithmetic::BigIntegerArithmetic;
use crate::errors::NumberTheoryError;

/// Number-theoretic operations modulo an odd prime.
///
/// Holds no mutable state; every method is a pure function of its arguments, so one value
/// can be shared freely between threads (it is `Sync` whenever the provider is).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberTheory<A> {
    math: A,
    search_limit: Option<u64>,
}

impl<A: BigIntegerArithmetic> NumberTheory<A> {
    /// Create a handle over the given arithmetic provider.
    pub fn new(math: A) -> Self {
        Self {
            math,
            search_limit: None,
        }
    }

    /// Cap the number of candidates tried while looking for a quadratic non-residue.
    ///
    /// Without a limit the search only stops at the modulus itself. With one, a call that
    /// exceeds it fails with [`NumberTheoryError::NonResidueSearchExhausted`].
    pub fn with_search_limit(mut self, limit: u64) -> Self {
        self.search_limit = Some(limit);
        self
    }

    /// The arithmetic provider.
    #[inline]
    pub fn math(&self) -> &A {
        &self.math
    }

    /// The configured non-residue search limit, if any.
    #[inline]
    pub fn search_limit(&self) -> Option<u64> {
        self.search_limit
    }

    /// Reject moduli that are even, smaller than 3, or too wide for the provider.
    pub(crate) fn check_odd_modulus(&self, p: &A::Int) -> Result<(), NumberTheoryError> {
        let math = &self.math;
        let too_small = math.cmp(p, &math.from_u64(3)).is_lt();
        if too_small || math.is_even(p) || !math.supports_modulus(p) {
            debug!("rejecting modulus {:?}", p);
            return Err(NumberTheoryError::InvalidModulus);
        }
        Ok(())
    }

    /// Modular inverse of `a` modulo `m`.
    pub fn inverse_mod(&self, a: &A::Int, m: &A::Int) -> Result<A::Int, NumberTheoryError> {
        if self.math.is_zero(m) {
            return Err(NumberTheoryError::InvalidModulus);
        }
        self.math
            .mod_inverse(a, m)
            .ok_or(NumberTheoryError::NotInvertible)
    }
}
