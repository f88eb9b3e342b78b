use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use timing_sieve::ConfidenceFilter;

fn bench_filtered_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("confidence_filter");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    for &size in &[100usize, 10_000, 1_000_000] {
        // Plausible timing noise with the occasional large spike.
        let samples: Vec<f64> = (0..size)
            .map(|_| {
                let base = rng.gen_range(900.0..1100.0);
                if rng.gen_ratio(1, 100) {
                    base * 50.0
                } else {
                    base
                }
            })
            .collect();

        group.bench_function(format!("filtered_mean_{}", size), |b| {
            b.iter(|| {
                ConfidenceFilter::new()
                    .filtered_mean(black_box(&samples))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filtered_mean);
criterion_main!(benches);
