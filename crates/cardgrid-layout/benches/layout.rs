//! Layout benchmarks: flow packing and drop placement on large collections.

use cardgrid_layout::{
    pack, CollectionId, CollisionSearch, GridConfig, GridEngine, GridPos, Rectangle,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic mix of card sizes.
fn cards(count: u64, columns: u32) -> Vec<Rectangle> {
    (0..count)
        .map(|i| {
            let width = (i % 3) as u32 + 1;
            let height = (i % 2) as u32 + 1;
            Rectangle::sized(i, width.min(columns), height).with_order(i as i64)
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for count in [50u64, 200, 1000] {
        let input = cards(count, 4);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| pack(black_box(input), 4))
        });
    }
    group.finish();
}

fn bench_place(c: &mut Criterion) {
    let board = pack(&cards(500, 16), 16).unwrap_or_default();
    let moving: Vec<Rectangle> = cards(12, 16)
        .into_iter()
        .map(|mut card| {
            card.id.0 += 10_000;
            card
        })
        .collect();
    let moving = pack(&moving, 16).unwrap_or_default();

    let mut group = c.benchmark_group("place");
    for search in [CollisionSearch::ForwardScan, CollisionSearch::Nearest] {
        let config = GridConfig::board(16).with_collision_search(search);
        let Ok(engine) = GridEngine::new(config) else {
            continue;
        };
        group.bench_function(format!("{search:?}"), |b| {
            b.iter(|| {
                engine.place(
                    black_box(&moving),
                    GridPos::new(10, 3),
                    CollectionId(1),
                    black_box(&board),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pack, bench_place);
criterion_main!(benches);
