//! Error types for point compression and encoding.

use numtheory::{ArithmeticError, NumberTheoryError};
use thiserror::Error;

/// Errors that can occur while compressing, decompressing or decoding points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A number-theory failure, passed through unchanged.
    ///
    /// [`NumberTheoryError::NoSquareRoot`] here means the x-coordinate does not belong to any
    /// point on the curve, i.e. the compressed point is invalid.
    #[error(transparent)]
    NumberTheory(#[from] NumberTheoryError),
    /// The encoding has the wrong length for this curve.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The leading byte is not a known SEC1 tag.
    #[error("invalid point prefix 0x{0:02x}")]
    InvalidPrefix(u8),
    /// A coordinate is not reduced modulo the field prime.
    #[error("coordinate is not in [0, p)")]
    CoordinateOutOfRange,
    /// The uncompressed point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
    /// The only point with this x-coordinate has y = 0, which is even.
    #[error("no curve point with the requested parity")]
    ParityUnavailable,
    /// A coordinate could not be imported into the arithmetic provider.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    /// Hex decoding failed.
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}
