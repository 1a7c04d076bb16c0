//! SEC1 byte and hex encodings of compressed and uncompressed points.

use curve::{AffinePoint, CurveParams};
use numtheory::BigIntegerArithmetic;

use crate::compression::{CompressedPoint, Parity, PointCodec};
use crate::constants::{
    compressed_size, uncompressed_size, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED,
};
use crate::errors::CodecError;

impl<A: BigIntegerArithmetic> PointCodec<A> {
    /// Encode as `prefix || x`, with x big-endian and padded to the field width.
    pub fn encode_compressed(
        &self,
        point: &CompressedPoint<A::Int>,
        curve: &CurveParams<A::Int>,
    ) -> Result<Vec<u8>, CodecError> {
        let width = curve.field_size(self.math());
        let mut out = Vec::with_capacity(compressed_size(width));
        out.push(point.parity.prefix());
        out.extend_from_slice(&self.coordinate_bytes(&point.x, curve, width)?);
        Ok(out)
    }

    /// Encode as `0x04 || x || y`.
    pub fn encode_uncompressed(
        &self,
        point: &AffinePoint<A::Int>,
        curve: &CurveParams<A::Int>,
    ) -> Result<Vec<u8>, CodecError> {
        let width = curve.field_size(self.math());
        let mut out = Vec::with_capacity(uncompressed_size(width));
        out.push(TAG_UNCOMPRESSED);
        out.extend_from_slice(&self.coordinate_bytes(&point.x, curve, width)?);
        out.extend_from_slice(&self.coordinate_bytes(&point.y, curve, width)?);
        Ok(out)
    }

    /// Parse `prefix || x` without solving for y.
    pub fn decode_compressed(
        &self,
        bytes: &[u8],
        curve: &CurveParams<A::Int>,
    ) -> Result<CompressedPoint<A::Int>, CodecError> {
        let width = curve.field_size(self.math());
        check_length(bytes, compressed_size(width))?;
        let parity = Parity::from_prefix(bytes[0])?;
        let x = self.read_coordinate(&bytes[1..], curve)?;
        Ok(CompressedPoint::new(parity, x))
    }

    /// Parse `0x04 || x || y` and check the point against the curve equation.
    pub fn decode_uncompressed(
        &self,
        bytes: &[u8],
        curve: &CurveParams<A::Int>,
    ) -> Result<AffinePoint<A::Int>, CodecError> {
        let width = curve.field_size(self.math());
        check_length(bytes, uncompressed_size(width))?;
        if bytes[0] != TAG_UNCOMPRESSED {
            return Err(CodecError::InvalidPrefix(bytes[0]));
        }

        let x = self.read_coordinate(&bytes[1..1 + width], curve)?;
        let y = self.read_coordinate(&bytes[1 + width..], curve)?;
        let point = AffinePoint::new(x, y);
        if !point.is_on_curve(curve, self.math()) {
            return Err(CodecError::NotOnCurve);
        }
        Ok(point)
    }

    /// Decode either SEC1 form, decompressing when needed.
    pub fn decode_point(
        &self,
        bytes: &[u8],
        curve: &CurveParams<A::Int>,
    ) -> Result<AffinePoint<A::Int>, CodecError> {
        match bytes.first() {
            Some(&TAG_COMPRESSED_EVEN) | Some(&TAG_COMPRESSED_ODD) => {
                let compressed = self.decode_compressed(bytes, curve)?;
                self.decompress(&compressed, curve)
            }
            Some(&TAG_UNCOMPRESSED) => self.decode_uncompressed(bytes, curve),
            Some(&other) => Err(CodecError::InvalidPrefix(other)),
            None => Err(CodecError::InvalidLength {
                expected: compressed_size(curve.field_size(self.math())),
                actual: 0,
            }),
        }
    }

    /// Lowercase hex of [`encode_compressed`](Self::encode_compressed).
    pub fn encode_compressed_hex(
        &self,
        point: &CompressedPoint<A::Int>,
        curve: &CurveParams<A::Int>,
    ) -> Result<String, CodecError> {
        Ok(hex::encode(self.encode_compressed(point, curve)?))
    }

    /// Lowercase hex of [`encode_uncompressed`](Self::encode_uncompressed).
    pub fn encode_uncompressed_hex(
        &self,
        point: &AffinePoint<A::Int>,
        curve: &CurveParams<A::Int>,
    ) -> Result<String, CodecError> {
        Ok(hex::encode(self.encode_uncompressed(point, curve)?))
    }

    /// [`decode_compressed`](Self::decode_compressed) from a hex string.
    pub fn decode_compressed_hex(
        &self,
        encoded: &str,
        curve: &CurveParams<A::Int>,
    ) -> Result<CompressedPoint<A::Int>, CodecError> {
        self.decode_compressed(&hex::decode(encoded)?, curve)
    }

    /// [`decode_point`](Self::decode_point) from a hex string.
    pub fn decode_point_hex(
        &self,
        encoded: &str,
        curve: &CurveParams<A::Int>,
    ) -> Result<AffinePoint<A::Int>, CodecError> {
        self.decode_point(&hex::decode(encoded)?, curve)
    }

    fn coordinate_bytes(
        &self,
        value: &A::Int,
        curve: &CurveParams<A::Int>,
        width: usize,
    ) -> Result<Vec<u8>, CodecError> {
        let math = self.math();
        if math.cmp(value, &curve.prime).is_ge() {
            return Err(CodecError::CoordinateOutOfRange);
        }
        let bytes = math.to_bytes_be(value);
        let mut out = vec![0u8; width - bytes.len()];
        out.extend_from_slice(&bytes);
        Ok(out)
    }

    fn read_coordinate(
        &self,
        bytes: &[u8],
        curve: &CurveParams<A::Int>,
    ) -> Result<A::Int, CodecError> {
        let math = self.math();
        let value = math.from_bytes_be(bytes)?;
        if math.cmp(&value, &curve.prime).is_ge() {
            return Err(CodecError::CoordinateOutOfRange);
        }
        Ok(value)
    }
}

fn check_length(bytes: &[u8], expected: usize) -> Result<(), CodecError> {
    if bytes.len() != expected {
        return Err(CodecError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(())
}
