use super::board::Board;
use super::error::{GameError, InvalidMoveReason};
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate_status;

/// Board, turn and outcome of a single round. X always opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current mark at `index` and returns the resulting status.
    /// The state is left untouched when the move is rejected.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::GameOver));
        }

        let position = Position::new(index)
            .ok_or_else(|| GameError::invalid_move(index, InvalidMoveReason::OutOfRange))?;

        if !self.board.is_empty_at(position) {
            return Err(GameError::invalid_move(index, InvalidMoveReason::Occupied));
        }

        self.board.set(position, self.current_mark);

        self.status = evaluate_status(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.place_mark(index).unwrap();
        }
    }

    #[test]
    fn test_center_move_flips_turn() {
        let mut state = TicTacToeGameState::new();
        let status = state.place_mark(4).unwrap();

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(state.board.get(Position::new(4).unwrap()), Mark::X);
        assert_eq!(state.current_mark, Mark::O);
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(0).unwrap();
        let before = state.clone();

        let err = state.place_mark(0).unwrap_err();
        assert_eq!(err, GameError::invalid_move(0, InvalidMoveReason::Occupied));
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = TicTacToeGameState::new();
        let err = state.place_mark(9).unwrap_err();
        assert_eq!(err, GameError::invalid_move(9, InvalidMoveReason::OutOfRange));
        assert_eq!(state, TicTacToeGameState::new());
    }

    #[test]
    fn test_top_row_win_keeps_turn_on_winner() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);

        assert_eq!(state.status.winner(), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::X);
        match state.status {
            GameStatus::Won(line) => {
                let cells: Vec<usize> = line.cells.iter().map(|p| p.index()).collect();
                assert_eq!(cells, vec![0, 1, 2]);
            }
            other => panic!("expected a win, got {:?}", other),
        }
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let before = state.clone();

        let err = state.place_mark(8).unwrap_err();
        assert_eq!(err, GameError::invalid_move(8, InvalidMoveReason::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_sequence() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.board, Board::from_layout("XOX XOO OXX"));
    }

    #[test]
    fn test_reset_clears_round() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[4, 0]);
        state.reset();
        assert_eq!(state, TicTacToeGameState::new());
    }
}
