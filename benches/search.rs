use criterion::{criterion_group, criterion_main, Criterion};
use gomoku::eval::{Evaluator, PatternWeights};
use gomoku::search::{FixedDepth, Searcher};
use gomoku::{AIEngine, Board, Pos, Stone};
use std::hint::black_box;

/// Mid-game position with a few short lines for both sides
fn midgame(rows: usize, cols: usize) -> Board {
    let mut board = Board::new(rows, cols).unwrap();
    let stones = [
        (4, 4, Stone::O),
        (4, 5, Stone::X),
        (5, 5, Stone::O),
        (5, 6, Stone::X),
        (6, 6, Stone::O),
        (3, 6, Stone::X),
        (6, 4, Stone::O),
        (6, 5, Stone::X),
    ];
    for (r, c, s) in stones {
        board.place_stone(Pos::new(r, c), s);
    }
    board
}

fn bench_evaluate_board(c: &mut Criterion) {
    let eval = Evaluator::new(Stone::X, PatternWeights::DEFENSIVE, 2);
    let small = midgame(10, 10);
    let large = midgame(19, 30);

    c.bench_function("eval/board_10x10", |b| b.iter(|| black_box(eval.evaluate_board(black_box(&small)))));
    c.bench_function("eval/board_19x30", |b| b.iter(|| black_box(eval.evaluate_board(black_box(&large)))));
}

fn bench_search(c: &mut Criterion) {
    let board = midgame(10, 10);

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    for depth in [2u8, 3] {
        group.bench_function(format!("alphabeta_depth_{depth}"), |b| {
            let eval = Evaluator::new(Stone::X, PatternWeights::DEFENSIVE, 2);
            let mut searcher = Searcher::new(eval, Box::new(FixedDepth(depth)));
            let mut work = board.clone();
            b.iter(|| black_box(searcher.search(&mut work).best_move))
        });
    }
    group.bench_function("engine_get_move", |b| {
        let mut engine = AIEngine::new(Stone::X).unwrap();
        b.iter(|| black_box(engine.get_move(black_box(&board))))
    });
    group.finish();
}

criterion_group!(benches, bench_evaluate_board, bench_search);
criterion_main!(benches);
