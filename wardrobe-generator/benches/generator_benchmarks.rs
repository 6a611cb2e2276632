//! Criterion benchmarks for the outfit generators.
//!
//! Measures generation time across wardrobe sizes (10, 40, 120 garments) for
//! the randomised and the exhaustive generator.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package wardrobe-generator
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use wardrobe_core::{GenerateRequest, Generator};
use wardrobe_generator::{ExhaustiveGenerator, OutfitGenerator};
use wardrobe_scorer::PairwiseScorer;


use bench_support::{BENCHMARK_SEED, generate_wardrobe};

/// Wardrobe sizes to benchmark.
const WARDROBE_SIZES: &[usize] = &[10, 40, 120];

/// Outfits requested per call.
const OUTFIT_COUNT: usize = 10;

fn build_request() -> GenerateRequest {
    GenerateRequest {
        count: OUTFIT_COUNT,
        seed: BENCHMARK_SEED,
        ..GenerateRequest::default()
    }
}

fn bench_generator<G>(c: &mut Criterion, group_name: &str, generator: &G)
where
    G: Generator,
{
    let mut group = c.benchmark_group(group_name);
    group.sample_size(50);
    group.measurement_time(Duration::from_secs(5));

    let request = build_request();
    for &size in WARDROBE_SIZES {
        let garments = generate_wardrobe(size, BENCHMARK_SEED);

        let throughput_size = u64::try_from(size).unwrap_or(u64::MAX);
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("garments", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking generation, result is intentionally discarded"
                )]
                let _ = generator.generate(&garments, &request);
            });
        });
    }

    group.finish();
}

fn bench_randomised(c: &mut Criterion) {
    let generator = OutfitGenerator::new(PairwiseScorer::default());
    bench_generator(c, "randomised_generation", &generator);
}

fn bench_exhaustive(c: &mut Criterion) {
    let generator = ExhaustiveGenerator::new(PairwiseScorer::default());
    bench_generator(c, "exhaustive_generation", &generator);
}

criterion_group!(benches, bench_randomised, bench_exhaustive);
criterion_main!(benches);
