use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sweeper_core::*;

const SIZES: [(Coord, Coord); 3] = [(9, 9), (64, 64), (512, 512)];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (height, width) in SIZES {
        let mines = mult(height, width) / 6;
        let config = GameConfig::new(height, width, mines).expect("valid config");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{height}x{width}")),
            &config,
            |b, &config| b.iter(|| RandomMineGenerator::new(7).generate(black_box(config))),
        );
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (height, width) in SIZES {
        // no mines: a single reveal opens the whole board
        let layout = MineLayout::from_mine_coords((height, width), &[]).expect("valid layout");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{height}x{width}")),
            &layout,
            |b, layout| {
                b.iter_batched(
                    || Board::from_layout(layout.clone()),
                    |mut board| board.reveal(black_box((0, 0))),
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
