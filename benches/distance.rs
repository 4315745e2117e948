//! Distance benchmark: attempt vs profile at typical password feature lengths.

use biokey_distance::config::VarianceAwareParams;
use biokey_distance::metric::{
    euclidean_distance, euclidean_distance_strict, variance_aware_distance, DistanceMetric,
};
use biokey_distance::{KeyPairProfile, KeyPairTiming};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn make_vectors(len: usize) -> (Vec<f32>, Vec<f32>) {
    let attempt = (0..len).map(|i| 80.0 + (i % 7) as f32 * 12.5).collect();
    let profile = (0..len).map(|i| 85.0 + (i % 5) as f32 * 11.0).collect();
    (attempt, profile)
}

fn bench_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("euclidean_distance");
    // 10, 20 and 64 character passwords with interleaved dwell/flight
    for len in [20usize, 40, 128] {
        let (attempt, profile) = make_vectors(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| euclidean_distance(black_box(&attempt), black_box(&profile), len))
        });
    }
    group.finish();
}

fn bench_strict_vs_lenient(c: &mut Criterion) {
    let (attempt, profile) = make_vectors(40);

    c.bench_function("distance_strict_40", |b| {
        b.iter(|| euclidean_distance_strict(black_box(&attempt), black_box(&profile), 40))
    });

    let lenient = DistanceMetric::lenient();
    c.bench_function("metric_lenient_score_40", |b| {
        b.iter(|| lenient.score(black_box(&attempt), black_box(&profile)))
    });
}

fn bench_variance_aware(c: &mut Criterion) {
    let attempt: Vec<KeyPairTiming> = (0..20)
        .map(|i| KeyPairTiming {
            dwell: 90.0 + (i % 7) as f32 * 6.0,
            flight: 40.0 + (i % 3) as f32 * 9.0,
        })
        .collect();
    let profile: Vec<KeyPairProfile> = (0..20)
        .map(|i| KeyPairProfile {
            mean_dwell: 95.0,
            mean_flight: 45.0,
            std_dwell: 10.0 + (i % 4) as f32 * 5.0,
            std_flight: 20.0,
            sample_count: 12,
        })
        .collect();
    let params = VarianceAwareParams::default();

    c.bench_function("variance_aware_20_pairs", |b| {
        b.iter(|| variance_aware_distance(black_box(&attempt), black_box(&profile), 20, &params))
    });
}

criterion_group!(benches, bench_lengths, bench_strict_vs_lenient, bench_variance_aware);
criterion_main!(benches);
