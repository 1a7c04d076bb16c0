use codec::PointCodec;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curve::CurveParams;
use numtheory::BigUintArithmetic;

fn bench_compress(c: &mut Criterion) {
    let codec = PointCodec::new(BigUintArithmetic);
    let curve = CurveParams::secp256k1(codec.math()).expect("secp256k1");

    c.bench_function("secp256k1_compress", |bencher| {
        bencher.iter(|| black_box(codec.compress(black_box(&curve.generator), &curve)))
    });
}

fn bench_decompress(c: &mut Criterion) {
    let codec = PointCodec::new(BigUintArithmetic);
    let curve = CurveParams::secp256k1(codec.math()).expect("secp256k1");
    let compressed = codec.compress(&curve.generator, &curve);

    c.bench_function("secp256k1_decompress", |bencher| {
        bencher.iter(|| {
            let point = codec
                .decompress(black_box(&compressed), &curve)
                .expect("decompress");
            black_box(point);
        })
    });
}

fn bench_decode_sec1(c: &mut Criterion) {
    let codec = PointCodec::new(BigUintArithmetic);
    let curve = CurveParams::secp256r1(codec.math()).expect("secp256r1");
    let bytes = codec
        .encode_compressed(&codec.compress(&curve.generator, &curve), &curve)
        .expect("encode");

    c.bench_function("secp256r1_decode_point", |bencher| {
        bencher.iter(|| {
            let point = codec.decode_point(black_box(&bytes), &curve).expect("decode");
            black_box(point);
        })
    });
}

criterion_group!(benches, bench_compress, bench_decompress, bench_decode_sec1);
criterion_main!(benches);
