//! Compressed/uncompressed public-key vectors.
//!
//! Each entry pairs a compressed point (`02`/`03` || x) with its uncompressed form
//! (`04` || x || y).

use codec::{Parity, PointCodec};
use curve::CurveParams;
use numtheory::{BigIntegerArithmetic, BigUint, BigUintArithmetic};
use serde::Deserialize;

const SECP256K1_VECTORS: &str = include_str!("data/secp256k1_compression.json");
const SECP256R1_VECTORS: &str = include_str!("data/secp256r1_compression.json");

#[derive(Debug, Deserialize)]
struct PointFixture {
    compressed: String,
    decompressed: String,
}

fn load(raw: &str) -> Vec<PointFixture> {
    serde_json::from_str(raw).expect("compression fixture")
}

fn check_decompression(curve: &CurveParams<BigUint>, fixtures: &[PointFixture]) {
    let codec = PointCodec::new(BigUintArithmetic);
    for fixture in fixtures {
        let point = codec
            .decode_point_hex(&fixture.compressed, curve)
            .expect("valid compressed point");
        let encoded = codec
            .encode_uncompressed_hex(&point, curve)
            .expect("encode");
        assert_eq!(encoded, fixture.decompressed);
    }
}

fn check_compression(curve: &CurveParams<BigUint>, fixtures: &[PointFixture]) {
    let codec = PointCodec::new(BigUintArithmetic);
    for fixture in fixtures {
        assert_eq!(&fixture.decompressed[..2], "04");
        let point = codec
            .decode_point_hex(&fixture.decompressed, curve)
            .expect("valid uncompressed point");
        let compressed = codec.compress(&point, curve);
        let encoded = codec
            .encode_compressed_hex(&compressed, curve)
            .expect("encode");
        assert_eq!(encoded, fixture.compressed);
    }
}

fn check_parity_prefix(curve: &CurveParams<BigUint>, fixtures: &[PointFixture]) {
    let codec = PointCodec::new(BigUintArithmetic);
    let math = codec.math();
    for fixture in fixtures {
        let y = math
            .from_str_radix(&fixture.decompressed[66..], 16)
            .expect("y");
        let compressed = codec
            .decode_compressed_hex(&fixture.compressed, curve)
            .expect("compressed");
        let expected = if &fixture.compressed[..2] == "02" {
            Parity::Even
        } else {
            Parity::Odd
        };
        assert_eq!(compressed.parity, expected);
        assert_eq!(math.is_even(&y), expected == Parity::Even);
    }
}

#[test]
fn test_secp256k1_decompression() {
    let curve = CurveParams::secp256k1(&BigUintArithmetic).expect("secp256k1");
    check_decompression(&curve, &load(SECP256K1_VECTORS));
}

#[test]
fn test_secp256k1_compression() {
    let curve = CurveParams::secp256k1(&BigUintArithmetic).expect("secp256k1");
    check_compression(&curve, &load(SECP256K1_VECTORS));
}

#[test]
fn test_secp256k1_parity_prefix() {
    let curve = CurveParams::secp256k1(&BigUintArithmetic).expect("secp256k1");
    check_parity_prefix(&curve, &load(SECP256K1_VECTORS));
}

#[test]
fn test_secp256r1_decompression() {
    let curve = CurveParams::secp256r1(&BigUintArithmetic).expect("secp256r1");
    check_decompression(&curve, &load(SECP256R1_VECTORS));
}

#[test]
fn test_secp256r1_compression() {
    let curve = CurveParams::secp256r1(&BigUintArithmetic).expect("secp256r1");
    check_compression(&curve, &load(SECP256R1_VECTORS));
}

#[test]
fn test_secp256r1_parity_prefix() {
    let curve = CurveParams::secp256r1(&BigUintArithmetic).expect("secp256r1");
    check_parity_prefix(&curve, &load(SECP256R1_VECTORS));
}

#[test]
fn test_vectors_rejected_on_wrong_curve() {
    let codec = PointCodec::new(BigUintArithmetic);
    let k1 = CurveParams::secp256k1(codec.math()).expect("secp256k1");
    for fixture in load(SECP256R1_VECTORS) {
        assert!(codec.decode_point_hex(&fixture.decompressed, &k1).is_err());
    }
}
