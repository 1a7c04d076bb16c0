//! Elliptic-curve point compression over prime fields.
//!
//! This library compresses affine points to `(parity of y, x)` and reconstructs them by
//! solving the curve equation with a modular square root:
//! - [`PointCodec`] drives compression and decompression for any [`curve::CurveParams`]
//! - square roots come from [`numtheory::NumberTheory`] (Tonelli-Shanks)
//! - SEC1 byte and hex encodings (`02`/`03` compressed, `04` uncompressed)
//!
//! # Example
//!
//! ```
//! use codec::PointCodec;
//! use curve::CurveParams;
//! use numtheory::BigUintArithmetic;
//!
//! let codec = PointCodec::new(BigUintArithmetic);
//! let curve = CurveParams::secp256k1(codec.math()).expect("secp256k1");
//!
//! // Compress the generator and encode it as 33 SEC1 bytes
//! let compressed = codec.compress(&curve.generator, &curve);
//! let encoded = codec.encode_compressed_hex(&compressed, &curve).expect("encode");
//! assert_eq!(
//!     encoded,
//!     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
//! );
//!
//! // Decode it back into the full point
//! let point = codec.decode_point_hex(&encoded, &curve).expect("decode");
//! assert_eq!(point, curve.generator);
//! ```
//!
//! # Security Considerations
//!
//! - Decompression always yields a point on the curve or an error; an x-coordinate with no
//!   square root surfaces as [`numtheory::NumberTheoryError::NoSquareRoot`]
//! - Uncompressed input is checked against the curve equation before it is returned
//! - Arithmetic is variable-time; do not feed secret values through this codec

mod compression;
pub mod constants;
mod encoding;
mod errors;


pub use compression::{CompressedPoint, Parity, PointCodec};
pub use errors::CodecError;
