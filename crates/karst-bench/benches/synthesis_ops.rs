//! Criterion micro-benchmarks for cellular-automaton synthesis.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use karst_automata::{GridSynthesizer, StageSchedule};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn synthesizer(width: u32, height: u32) -> GridSynthesizer {
    GridSynthesizer::builder()
        .width(width)
        .height(height)
        .schedule(StageSchedule::standard(7, 5, 7, 5).unwrap())
        .build()
        .unwrap()
}

/// Benchmark: seed noise on the reference 80×43 map.
fn bench_seed_noise_reference(c: &mut Criterion) {
    let synth = synthesizer(80, 43);

    c.bench_function("seed_noise_80x43", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            let grid = synth.seed_noise(&mut rng).unwrap();
            black_box(&grid);
        });
    });
}

/// Benchmark: the full 7-stage evolve on a pre-seeded 80×43 map.
fn bench_evolve_reference(c: &mut Criterion) {
    let synth = synthesizer(80, 43);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let seeded = synth.seed_noise(&mut rng).unwrap();

    c.bench_function("evolve_80x43", |b| {
        b.iter(|| {
            let mut grid = seeded.clone();
            synth.evolve(&mut grid);
            black_box(&grid);
        });
    });
}

/// Benchmark: full synthesis at stress scale (240×180).
fn bench_synthesize_stress(c: &mut Criterion) {
    let synth = synthesizer(240, 180);

    c.bench_function("synthesize_240x180", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| {
            let grid = synth.synthesize(&mut rng).unwrap();
            black_box(&grid);
        });
    });
}

criterion_group!(
    benches,
    bench_seed_noise_reference,
    bench_evolve_reference,
    bench_synthesize_stress,
);
criterion_main!(benches);
