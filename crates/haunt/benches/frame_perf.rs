//! Benchmark: cost of one `Haunt::frame` with a full swarm.
//!
//! The swarm is tiny, so this mostly guards against the frame loop picking
//! up per-frame allocation or accidental O(n²) work as the pool grows.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use haunt::config::HauntConfig;
use haunt::stage::NullStage;
use haunt::viewport::Viewport;
use haunt::{GhostField, Haunt};

fn full_haunt(max_ghosts: usize) -> Haunt {
    let config = HauntConfig {
        max_ghosts,
        ..HauntConfig::default()
    };
    let viewport = Viewport::new(1920.0, 1080.0).expect("valid viewport");
    let mut haunt = Haunt::new(config, viewport, 7).expect("valid config");
    for _ in 0..max_ghosts {
        haunt.spawn_tick(&mut NullStage);
    }
    haunt
}

/// Default cap: five ghosts stepping, no spawns due.
fn bench_frame_default_cap(c: &mut Criterion) {
    c.bench_function("frame_5_ghosts", |b| {
        let mut haunt = full_haunt(5);
        b.iter(|| {
            black_box(haunt.frame(16.0, &mut NullStage));
        });
    });
}

/// A much larger pool to make per-ghost cost visible.
fn bench_frame_large_pool(c: &mut Criterion) {
    c.bench_function("frame_1000_ghosts", |b| {
        let mut haunt = full_haunt(1000);
        b.iter(|| {
            black_box(haunt.frame(16.0, &mut NullStage));
        });
    });
}

/// Spawning from empty to full, re-seeded every iteration.
fn bench_fill_from_empty(c: &mut Criterion) {
    c.bench_function("fill_5_from_empty", |b| {
        b.iter_batched(
            || GhostField::new(1920.0, 1080.0, 3).expect("valid field"),
            |mut field| {
                field.frame(10_000.0);
                black_box(field.positions());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_frame_default_cap,
    bench_frame_large_pool,
    bench_fill_from_empty,
);
criterion_main!(benches);
