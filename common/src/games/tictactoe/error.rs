use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    GameOver,
    SearchPending,
    NotYourTurn,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfRange => "position out of bounds",
            InvalidMoveReason::Occupied => "cell is already marked",
            InvalidMoveReason::GameOver => "round is already over",
            InvalidMoveReason::SearchPending => "bot is still thinking",
            InvalidMoveReason::NotYourTurn => "it is the bot's turn",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move at {position}: {reason}")]
    InvalidMove {
        position: usize,
        reason: InvalidMoveReason,
    },

    #[error("move search found no legal move")]
    SearchFailure,
}

impl GameError {
    pub fn invalid_move(position: usize, reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove { position, reason }
    }
}
