use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use damson_draughts::board::board_graph::Board;
use damson_draughts::board::board_types::{Coordinate, Side};
use damson_draughts::rules::move_resolver::resolve_moves;
use damson_draughts::utils::playout_harness::{run_playout, PlayoutConfig};

/// Resolve every Black piece of the standard setup once.
fn resolve_standard_setup(board: &Board) -> usize {
    let mut destinations = 0usize;
    for y in 0..3i8 {
        for x in 0..8i8 {
            if let Some(id) = board.cell_id(Coordinate::new(x, y)) {
                if board.cell(id).piece().is_some() {
                    destinations += resolve_moves(board, id).destinations.len();
                }
            }
        }
    }
    destinations
}

fn bench_resolver(c: &mut Criterion) {
    let board = Board::standard();
    assert_eq!(board.live_count(Side::Black), 12);

    let mut group = c.benchmark_group("move_resolver");
    group.throughput(Throughput::Elements(12));
    group.bench_function("standard_setup_black", |b| {
        b.iter(|| resolve_standard_setup(black_box(&board)))
    });
    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("playout");
    group.sample_size(20);
    group.bench_function("seeded_full_game", |b| {
        b.iter(|| {
            run_playout(black_box(&PlayoutConfig {
                seed: 1234,
                max_plies: 256,
            }))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_resolver, bench_playout);
criterion_main!(benches);
