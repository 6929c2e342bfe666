use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use common::games::SessionRng;
use common::games::tictactoe::{
    Board, BotInput, Mark, RemarkCatalog, TicTacToeGameState, calculate_minimax_move, calculate_move,
};

fn board_from(moves: &[(usize, Mark)]) -> Board {
    let mut cells = [Mark::Empty; 9];
    for &(index, mark) in moves {
        cells[index] = mark;
    }
    Board::from_cells(cells)
}

fn bench_full_self_play() {
    let mut state = TicTacToeGameState::new();
    while !state.status.is_over() {
        let input = BotInput::from_game_state(&state);
        let Some(pos) = calculate_minimax_move(&input) else {
            break;
        };
        if state.place_mark(pos.index()).is_err() {
            break;
        }
    }
}

fn bench_reply_to_center_opening() {
    let input = BotInput::new(board_from(&[(4, Mark::X)]), Mark::O);
    black_box(calculate_minimax_move(&input));
}

fn bench_reply_mid_game() {
    let board = board_from(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    let input = BotInput::new(board, Mark::O);
    black_box(calculate_minimax_move(&input));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("self_play", |b| b.iter(bench_full_self_play));

    group.bench_function("reply_to_center_opening", |b| {
        b.iter(bench_reply_to_center_opening)
    });

    group.bench_function("reply_mid_game", |b| b.iter(bench_reply_mid_game));

    let remarks = RemarkCatalog::default();
    let mut rng = SessionRng::new(7);
    group.bench_function("calculate_move_with_remark", |b| {
        let input = BotInput::new(board_from(&[(4, Mark::X)]), Mark::O);
        b.iter(|| black_box(calculate_move(&input, &remarks, &mut rng)))
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
