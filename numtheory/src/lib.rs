//! Number theory modulo an odd prime, generic over the integer arithmetic backend.
//!
//! This crate provides the [`BigIntegerArithmetic`] capability with two providers
//! ([`BigUintArithmetic`] for arbitrary precision, [`NativeArithmetic`] for word-sized
//! moduli) and [`NumberTheory`], which builds quadratic-residue classification and modular
//! square roots (Tonelli-Shanks) on top of any provider.
//!
//! # Example
//!
//! ```
//! use numtheory::{BigIntegerArithmetic, BigUintArithmetic, NumberTheory, QuadraticResidue};
//!
//! let theory = NumberTheory::new(BigUintArithmetic);
//! let math = theory.math();
//! let p = math.from_u64(13);
//!
//! assert_eq!(
//!     theory.classify_residue(&math.from_u64(4), &p),
//!     Ok(QuadraticResidue::Residue)
//! );
//! let root = theory.square_root_mod_p(&math.from_u64(4), &p).expect("4 is a square");
//! assert_eq!(root, math.from_u64(2));
//! ```

mod arithmetic;
mod biguint;
mod errors;
mod native;
mod random;
mod residue;
mod sqrt;
mod theory;

pub use arithmetic::BigIntegerArithmetic;
pub use biguint::BigUintArithmetic;
pub use errors::{ArithmeticError, NumberTheoryError};
pub use native::NativeArithmetic;
pub use num_bigint::BigUint;
pub use random::RandomInteger;
pub use residue::QuadraticResidue;
pub use theory::NumberTheory;
