mod board;
mod bot_controller;
mod driver;
mod error;
mod game_state;
mod remarks;
mod session;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, BotMove, calculate_minimax_move, calculate_move};
pub use driver::{
    DEFAULT_ROUND_RESET_DELAY, DEFAULT_THINKING_DELAY_MAX, DEFAULT_THINKING_DELAY_MIN,
    DriverSettings, SessionDriver, SessionObserver,
};
pub use error::{GameError, InvalidMoveReason};
pub use game_state::TicTacToeGameState;
pub use remarks::{DEFAULT_REMARKS, RemarkCatalog};
pub use session::{
    BotTicket, BotTurnResult, DEFAULT_BOT_LABEL, DEFAULT_PLAYER_O_LABEL, DEFAULT_PLAYER_X_LABEL,
    PlayerLabels, SessionSnapshot, TicTacToeSession,
};
pub use types::{BOARD_SIDE, CELL_COUNT, CENTER, GameMode, GameStatus, Mark, Position, ScoreTally, WinningLine};
pub use win_detector::{LINES, check_win, check_win_with_line, evaluate_status};
