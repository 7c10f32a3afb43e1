use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modmath::prelude::{extended_gcd, mod_inv, mod_pow};
use num_bigint::{BigInt, RandBigInt};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn criterion_benchmark_euclid(c: &mut Criterion) {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    let a_small = BigInt::from(12345);
    let b_small = BigInt::from(999982);
    let a_big: BigInt = rng.gen_biguint(1024).into();
    let b_big: BigInt = rng.gen_biguint(1024).into();

    let mut group = c.benchmark_group("extended_gcd");
    group.bench_function("20 bit", |bench| {
        bench.iter(|| extended_gcd(black_box(a_small.clone()), black_box(b_small.clone())));
    });
    group.bench_function("1024 bit", |bench| {
        bench.iter(|| extended_gcd(black_box(a_big.clone()), black_box(b_big.clone())));
    });
    group.bench_function("mod_inv 20 bit", |bench| {
        bench.iter(|| mod_inv(&a_small, &b_small));
    });
    group.finish();
}

fn criterion_benchmark_pow(c: &mut Criterion) {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    let base = BigInt::from(123456);
    let exp = BigInt::from(12345);
    let modulus = BigInt::from(999983);
    let base_big: BigInt = rng.gen_biguint(1024).into();
    let exp_big: BigInt = rng.gen_biguint(1024).into();
    let modulus_big: BigInt = (rng.gen_biguint(1024) + 1u32).into();

    let mut group = c.benchmark_group("mod_pow");
    group.bench_function("20 bit", |bench| {
        bench.iter(|| mod_pow(&base, &exp, &modulus));
    });
    group.bench_function("1024 bit", |bench| {
        bench.iter(|| mod_pow(&base_big, &exp_big, &modulus_big));
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark_euclid, criterion_benchmark_pow
);
criterion_main!(benches);
