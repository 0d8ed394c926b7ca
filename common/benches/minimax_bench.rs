use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, Cell, Mark, Outcome, check_win, select_move};

fn bench_select_move_empty_board() {
    let board = Board::new();
    black_box(select_move(black_box(&board), Mark::X));
}

fn bench_select_move_after_center_opening() {
    let mut board = Board::new();
    board.set(4, Mark::X);
    black_box(select_move(black_box(&board), Mark::O));
}

fn bench_select_move_mid_game() {
    let board = Board::from_cells([
        Cell::X, Cell::Empty, Cell::Empty,
        Cell::Empty, Cell::O, Cell::Empty,
        Cell::Empty, Cell::Empty, Cell::X,
    ]);
    black_box(select_move(black_box(&board), Mark::O));
}

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    while check_win(&board) == Outcome::InProgress {
        let Some(position) = select_move(&board, mark) else {
            break;
        };
        board.set(position, mark);
        mark = mark.opponent();
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(20);

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_select_move_empty_board)
    });

    group.bench_function("single_move_center_opening", |b| {
        b.iter(bench_select_move_after_center_opening)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_select_move_mid_game)
    });

    group.bench_function("self_play_game", |b| {
        b.iter(bench_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
