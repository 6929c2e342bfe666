use crate::games::SessionRng;
use super::board::{Board, get_available_moves, is_valid_move};
use super::error::GameError;
use super::game_state::TicTacToeGameState;
use super::remarks::RemarkCatalog;
use super::types::{CENTER, Mark, Position};
use super::win_detector::check_win;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub remark: String,
}

/// Picks the bot's move and a remark to go with it.
///
/// Falls back to a random legal move when the search comes back empty, and
/// only fails when the board has no empty cell at all.
pub fn calculate_move(
    input: &BotInput,
    remarks: &RemarkCatalog,
    rng: &mut SessionRng,
) -> Result<BotMove, GameError> {
    let searched = calculate_minimax_move(input).filter(|p| is_valid_move(&input.board, p.index()));
    let position = match searched {
        Some(position) => position,
        None => calculate_random_move(input, rng).ok_or(GameError::SearchFailure)?,
    };

    Ok(BotMove {
        position,
        remark: remarks.pick(rng),
    })
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = get_available_moves(&input.board);
    rng.choose(&available_moves).copied()
}

/// Exhaustive minimax over the remaining cells.
///
/// Wins score the same at every depth, and among equally scored moves the
/// lowest position wins. Immediate wins and blocks are taken before the full
/// search so that a slower forced win never shadows a win on the board.
pub fn calculate_minimax_move(input: &BotInput) -> Option<Position> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;
    let available_moves = get_available_moves(&input.board);

    if available_moves.is_empty() {
        return None;
    }

    if let Some(position) = opening_move(&input.board) {
        return Some(position);
    }

    let mut board = input.board;

    if let Some(position) = find_winning_move(&mut board, bot_mark, &available_moves) {
        return Some(position);
    }

    if let Some(position) = find_winning_move(&mut board, opponent_mark, &available_moves) {
        return Some(position);
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for position in available_moves {
        board.set(position, bot_mark);
        let score = minimax(&mut board, false, bot_mark);
        board.set(position, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

fn opening_move(board: &Board) -> Option<Position> {
    match board.filled_count() {
        0 => Some(CENTER),
        1 if board.is_empty_at(CENTER) => Some(CENTER),
        _ => None,
    }
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[Position]) -> Option<Position> {
    for &position in moves {
        board.set(position, mark);
        let winner = check_win(board);
        board.set(position, Mark::Empty);

        if winner == Some(mark) {
            return Some(position);
        }
    }
    None
}

fn terminal_score(board: &Board, bot_mark: Mark) -> Option<i32> {
    match check_win(board) {
        Some(winner) if winner == bot_mark => Some(WIN_SCORE),
        Some(_) => Some(LOSS_SCORE),
        None if board.is_full() => Some(DRAW_SCORE),
        None => None,
    }
}

fn minimax(board: &mut Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if let Some(score) = terminal_score(board, bot_mark) {
        return score;
    }

    let Some(opponent_mark) = bot_mark.opponent() else {
        return DRAW_SCORE;
    };

    let (mover, mut best) = if is_maximizing {
        (bot_mark, i32::MIN)
    } else {
        (opponent_mark, i32::MAX)
    };

    for position in Position::all() {
        if !board.is_empty_at(position) {
            continue;
        }

        board.set(position, mover);
        let eval = minimax(board, !is_maximizing, bot_mark);
        board.set(position, Mark::Empty);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}
