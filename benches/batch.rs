use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simdvec::{SimdBatch, Vec3};

// --- Configuration ---
const VECTOR_LENGTHS: &[usize] = &[
    1024,
    65_536,
    1_048_576, // Huge: large enough for the parallel path to pay off
];

fn generate_data(len: usize) -> (Vec<Vec3>, Vec<Vec3>) {
    let mut rng = StdRng::seed_from_u64(len as u64);
    let mut next_vec = || {
        Vec3::new(
            rng.random_range(-1.0_f32..1.0_f32),
            rng.random_range(-1.0_f32..1.0_f32),
            rng.random_range(-1.0_f32..1.0_f32),
        )
    };

    let a: Vec<Vec3> = (0..len).map(|_| next_vec()).collect();
    let b: Vec<Vec3> = (0..len).map(|_| next_vec()).collect();

    (a, b)
}

fn bench_batch_dot(c: &mut Criterion) {
    for &len in VECTOR_LENGTHS.iter() {
        let mut group = c.benchmark_group(format!("BatchDot/{len}"));

        let (a, b) = generate_data(len);
        let mut out = vec![0.0f32; len];

        group.bench_function("dot_into", |bencher| {
            bencher.iter(|| a.dot_into(black_box(&b), black_box(&mut out)))
        });

        group.bench_function("par_dot_into", |bencher| {
            bencher.iter(|| a.par_dot_into(black_box(&b), black_box(&mut out)))
        });

        group.finish();
    }
}

fn bench_batch_normalize(c: &mut Criterion) {
    for &len in VECTOR_LENGTHS.iter() {
        let mut group = c.benchmark_group(format!("BatchNormalize/{len}"));

        let (a, _) = generate_data(len);

        group.bench_function("normalize_all", |bencher| {
            bencher.iter_batched_ref(
                || a.clone(),
                |v| v.normalize_all(),
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_function("par_normalize_all", |bencher| {
            bencher.iter_batched_ref(
                || a.clone(),
                |v| v.par_normalize_all(),
                criterion::BatchSize::LargeInput,
            )
        });

        group.finish();
    }
}

criterion_group!(benches, bench_batch_dot, bench_batch_normalize);

criterion_main!(benches);
