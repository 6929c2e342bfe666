use crate::{log, log_debug};
use super::board::Board;
use super::bot_controller::{BotInput, BotMove};
use super::error::{GameError, InvalidMoveReason};
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, GameStatus, Mark, ScoreTally};

pub const DEFAULT_PLAYER_X_LABEL: &str = "Player 1";
pub const DEFAULT_PLAYER_O_LABEL: &str = "Player 2";
pub const DEFAULT_BOT_LABEL: &str = "Bot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLabels {
    pub player_x: String,
    pub player_o: String,
}

impl PlayerLabels {
    /// Blank or missing labels fall back to the defaults; in `HumanVsBot`
    /// mode O defaults to `bot_label`.
    pub fn resolve(
        mode: GameMode,
        player_x: Option<String>,
        player_o: Option<String>,
        bot_label: &str,
    ) -> Self {
        let non_blank = |label: Option<String>| {
            label
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
        };

        let default_o = match mode {
            GameMode::HumanVsHuman => DEFAULT_PLAYER_O_LABEL,
            GameMode::HumanVsBot => bot_label,
        };

        Self {
            player_x: non_blank(player_x).unwrap_or_else(|| DEFAULT_PLAYER_X_LABEL.to_string()),
            player_o: non_blank(player_o).unwrap_or_else(|| default_o.to_string()),
        }
    }

    pub fn for_mark(&self, mark: Mark) -> &str {
        match mark {
            Mark::O => &self.player_o,
            _ => &self.player_x,
        }
    }
}

/// Handed out when a bot search starts. Only a ticket from the current
/// generation can place the bot's mark.
#[derive(Debug, Clone, Copy)]
pub struct BotTicket {
    generation: u64,
    input: BotInput,
}

impl BotTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn input(&self) -> &BotInput {
        &self.input
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotTurnResult {
    Applied(GameStatus),
    Discarded,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub labels: PlayerLabels,
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub tally: ScoreTally,
    pub search_pending: bool,
    pub last_remark: Option<String>,
    pub generation: u64,
    pub active: bool,
}

#[derive(Debug)]
pub struct TicTacToeSession {
    mode: GameMode,
    labels: PlayerLabels,
    game_state: TicTacToeGameState,
    tally: ScoreTally,
    search_pending: bool,
    last_remark: Option<String>,
    generation: u64,
    active: bool,
}

impl TicTacToeSession {
    pub fn start(mode: GameMode, player_x: Option<String>, player_o: Option<String>) -> Self {
        Self::start_with_bot_label(mode, player_x, player_o, DEFAULT_BOT_LABEL)
    }

    pub fn start_with_bot_label(
        mode: GameMode,
        player_x: Option<String>,
        player_o: Option<String>,
        bot_label: &str,
    ) -> Self {
        let labels = PlayerLabels::resolve(mode, player_x, player_o, bot_label);
        log!("Session started: {} ({} as X, {} as O)", mode, labels.player_x, labels.player_o);

        Self {
            mode,
            labels,
            game_state: TicTacToeGameState::new(),
            tally: ScoreTally::default(),
            search_pending: false,
            last_remark: None,
            generation: 0,
            active: true,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn labels(&self) -> &PlayerLabels {
        &self.labels
    }

    pub fn board(&self) -> &Board {
        &self.game_state.board
    }

    pub fn current_mark(&self) -> Mark {
        self.game_state.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.game_state.status
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_pending
    }

    pub fn last_remark(&self) -> Option<&str> {
        self.last_remark.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_bot_turn(&self) -> bool {
        self.active
            && self.game_state.status == GameStatus::InProgress
            && self.mode.bot_mark() == Some(self.game_state.current_mark)
    }

    /// Applies a human move.
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        if !self.active {
            return Err(GameError::invalid_move(index, InvalidMoveReason::GameOver));
        }
        if self.search_pending {
            return Err(GameError::invalid_move(index, InvalidMoveReason::SearchPending));
        }
        if self.is_bot_turn() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::NotYourTurn));
        }

        let status = self.commit_move(index)?;
        if status == GameStatus::InProgress {
            self.last_remark = None;
        }
        Ok(status)
    }

    /// Marks a search as in flight. Returns `None` when it is not the bot's
    /// turn or a search is already running.
    pub fn begin_bot_turn(&mut self) -> Option<BotTicket> {
        if self.search_pending || !self.is_bot_turn() {
            return None;
        }

        self.search_pending = true;
        Some(BotTicket {
            generation: self.generation,
            input: BotInput::from_game_state(&self.game_state),
        })
    }

    pub fn complete_bot_turn(
        &mut self,
        ticket: BotTicket,
        bot_move: BotMove,
    ) -> Result<BotTurnResult, GameError> {
        if !self.is_current(&ticket) {
            log_debug!(
                "Discarding bot move {} from generation {} (now {})",
                bot_move.position,
                ticket.generation,
                self.generation
            );
            return Ok(BotTurnResult::Discarded);
        }

        let status = self.commit_move(bot_move.position.index())?;
        self.search_pending = false;
        self.last_remark = Some(bot_move.remark);
        Ok(BotTurnResult::Applied(status))
    }

    /// Clears the pending flag after a search that produced no usable move.
    pub fn abort_bot_turn(&mut self, ticket: &BotTicket) {
        if self.is_current(ticket) {
            self.search_pending = false;
        }
    }

    pub fn reset_round(&mut self) {
        self.game_state.reset();
        self.search_pending = false;
        self.last_remark = None;
        self.generation += 1;
        log_debug!("Round reset, generation {}", self.generation);
    }

    /// Resets the round only if nothing else reset it since `generation`.
    pub fn reset_round_if_current(&mut self, generation: u64) -> bool {
        if !self.active || self.generation != generation {
            return false;
        }
        self.reset_round();
        true
    }

    pub fn reset_session(&mut self) {
        self.tally = ScoreTally::default();
        self.reset_round();
        log!("Scores reset");
    }

    pub fn exit(&mut self) {
        self.reset_session();
        self.active = false;
        log!("Session exited");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            labels: self.labels.clone(),
            board: self.game_state.board,
            current_mark: self.game_state.current_mark,
            status: self.game_state.status,
            tally: self.tally,
            search_pending: self.search_pending,
            last_remark: self.last_remark.clone(),
            generation: self.generation,
            active: self.active,
        }
    }

    fn is_current(&self, ticket: &BotTicket) -> bool {
        self.active && self.search_pending && ticket.generation == self.generation
    }

    fn commit_move(&mut self, index: usize) -> Result<GameStatus, GameError> {
        let mark = self.game_state.current_mark;
        let status = self.game_state.place_mark(index)?;

        match status {
            GameStatus::Won(line) => {
                self.tally.record(&status);
                log!("{} ({}) won the round", self.labels.for_mark(line.mark), line.mark);
            }
            GameStatus::Draw => {
                self.tally.record(&status);
                log!("Round ended in a draw");
            }
            GameStatus::InProgress => {
                log_debug!("{} placed at {}", mark, index);
            }
        }

        Ok(status)
    }
}
