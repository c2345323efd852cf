//! Loadout generation benchmarks
//!
//! Run with: `cargo bench --bench generation`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use stsarena::data;
use stsarena::loadout::{generate_random, generate_with_event_count, PlayerClass};

fn bench_generate_random(c: &mut Criterion) {
    // Force the lazy tables before timing
    black_box(data::tables());

    c.bench_function("generate_random", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| generate_random(black_box(&mut rng)))
    });
}

fn bench_event_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_with_event_count");
    for events in [0usize, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(events), &events, |b, &events| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            b.iter(|| generate_with_event_count(PlayerClass::Defect, events, &mut rng))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate_random, bench_event_counts);
criterion_main!(benches);
