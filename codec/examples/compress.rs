use codec::{CompressedPoint, PointCodec};
use curve::CurveParams;
use numtheory::{BigUint, BigUintArithmetic};

fn main() {
    let codec = PointCodec::new(BigUintArithmetic);
    let curve = CurveParams::secp256k1(codec.math()).expect("secp256k1");

    let compressed = codec.compress(&curve.generator, &curve);
    let sec1 = codec
        .encode_compressed_hex(&compressed, &curve)
        .expect("encode");
    println!("compressed generator: {sec1}");

    let bytes = bincode::serialize(&compressed).expect("serialize compressed");
    let restored: CompressedPoint<BigUint> =
        bincode::deserialize(&bytes).expect("deserialize compressed");

    let point = codec.decompress(&restored, &curve).expect("decompress");
    assert_eq!(point, curve.generator);
    println!(
        "uncompressed generator: {}",
        codec
            .encode_uncompressed_hex(&point, &curve)
            .expect("encode")
    );
}
