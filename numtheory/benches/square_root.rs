use criterion::{black_box, criterion_group, criterion_main, Criterion};
use numtheory::{BigIntegerArithmetic, BigUint, BigUintArithmetic, NumberTheory, RandomInteger};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SECP256K1_P: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
const P224_P: &str = "ffffffffffffffffffffffffffffffff000000000000000000000001";

fn random_square(theory: &NumberTheory<BigUintArithmetic>, hex: &str) -> (BigUint, BigUint) {
    let mut rng = StdRng::seed_from_u64(42);
    let math = theory.math();
    let p = math.from_str_radix(hex, 16).expect("prime");
    let x = math.random_below(&p, &mut rng);
    (math.modulo(&math.mul(&x, &x), &p), p)
}

fn bench_sqrt_fast_path(c: &mut Criterion) {
    let theory = NumberTheory::new(BigUintArithmetic);
    let (a, p) = random_square(&theory, SECP256K1_P);
    c.bench_function("sqrt_secp256k1", |bencher| {
        bencher.iter(|| black_box(theory.square_root_mod_p(black_box(&a), &p)))
    });
}

fn bench_sqrt_tonelli_shanks(c: &mut Criterion) {
    let theory = NumberTheory::new(BigUintArithmetic);
    let (a, p) = random_square(&theory, P224_P);
    c.bench_function("sqrt_p224_tonelli_shanks", |bencher| {
        bencher.iter(|| black_box(theory.square_root_mod_p(black_box(&a), &p)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let theory = NumberTheory::new(BigUintArithmetic);
    let (a, p) = random_square(&theory, SECP256K1_P);
    c.bench_function("classify_secp256k1", |bencher| {
        bencher.iter(|| black_box(theory.classify_residue(black_box(&a), &p)))
    });
}

criterion_group!(
    benches,
    bench_sqrt_fast_path,
    bench_sqrt_tonelli_shanks,
    bench_classify
);
criterion_main!(benches);
