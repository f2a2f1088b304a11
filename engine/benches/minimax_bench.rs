use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::games::tictactoe::{Board, Mark, Outcome, best_move_for, evaluate, select_move};

fn bench_full_self_play_game() {
    let mut board = Board::new();
    while evaluate(&board) == Outcome::InProgress {
        let mark = board.next_mark();
        let Ok(index) = best_move_for(&board, mark) else {
            break;
        };
        board = board.with_mark(index, mark);
    }
}

fn bench_single_move_after_opening() {
    let board = Board::new().with_mark(0, Mark::Cross);
    select_move(black_box(&board));
}


fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("self_play_game", |b| b.iter(bench_full_self_play_game));

    group.bench_function("single_move_after_opening", |b| {
        b.iter(bench_single_move_after_opening)
    });

    let mid_game: Board = "X.O/.X./...".parse().unwrap();
    group.bench_function("single_move_mid_game", |b| {
        b.iter(|| select_move(black_box(&mid_game)))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
