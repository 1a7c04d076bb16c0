//! SEC1 point encoding constants.

/// Prefix of a compressed point whose y-coordinate is even.
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// Prefix of a compressed point whose y-coordinate is odd.
pub const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Prefix of an uncompressed point.
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Size of a compressed point for a 256-bit curve: prefix plus x (32 bytes).
/// Total: 33 bytes
pub const COMPRESSED_SIZE_256: usize = compressed_size(32);

/// Size of an uncompressed point for a 256-bit curve: prefix plus x and y.
/// Total: 65 bytes
pub const UNCOMPRESSED_SIZE_256: usize = uncompressed_size(32);

/// Encoded size of a compressed point given the coordinate width in bytes.
#[inline]
pub const fn compressed_size(field_size: usize) -> usize {
    1 + field_size
}

/// Encoded size of an uncompressed point given the coordinate width in bytes.
#[inline]
pub const fn uncompressed_size(field_size: usize) -> usize {
    1 + 2 * field_size
}
