use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;
use std::hint::black_box;
use strided_cusum::{cusumpw, cusumpw_strided, AccessorArray};

fn normal_data(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..n).map(|_| rng.sample(StandardNormal)).collect()
}

fn naive_cusum(sum: f64, x: &[f64], y: &mut [f64]) {
    let mut s = sum;
    for (out, &v) in y.iter_mut().zip(x) {
        s += v;
        *out = s;
    }
}

fn bench_contiguous(c: &mut Criterion) {
    let mut group = c.benchmark_group("cusum_contiguous");
    for n in [100usize, 10_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let x = normal_data(n);
        let mut y = vec![0.0; n];

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, _| {
            b.iter(|| naive_cusum(black_box(0.0), black_box(&x), &mut y));
        });

        group.bench_with_input(BenchmarkId::new("pairwise", n), &n, |b, &n| {
            b.iter(|| {
                cusumpw_strided(n as isize, black_box(0.0), black_box(&x), 1, 0, &mut y, 1, 0);
            });
        });
    }
    group.finish();
}

fn bench_strided(c: &mut Criterion) {
    let mut group = c.benchmark_group("cusum_strided");
    for n in [10_000usize, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        let x = normal_data(2 * n);
        let mut y = vec![0.0; 3 * n];

        group.bench_with_input(BenchmarkId::new("stride2_to_neg3", n), &n, |b, &n| {
            b.iter(|| {
                cusumpw(n as isize, black_box(0.0), black_box(&x), 2, &mut y, -3);
            });
        });
    }
    group.finish();
}

fn bench_accessor_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("cusum_access_strategy");
    let n = 100_000usize;
    group.throughput(Throughput::Elements(n as u64));
    let x = normal_data(n);
    let xa = AccessorArray::new(x.clone());
    let mut y = vec![0.0; n];
    let mut ya = AccessorArray::new(vec![0.0; n]);

    group.bench_function("indexed", |b| {
        b.iter(|| {
            cusumpw_strided(n as isize, black_box(0.0), black_box(&x), 1, 0, &mut y, 1, 0);
        });
    });
    group.bench_function("accessor", |b| {
        b.iter(|| {
            cusumpw_strided(n as isize, black_box(0.0), black_box(&xa), 1, 0, &mut ya, 1, 0);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_contiguous, bench_strided, bench_accessor_path);
criterion_main!(benches);
