use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const CENTER: Position = Position(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Cell index in `[0, 9)`, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(pub(super) usize);

impl Position {
    pub fn new(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(Self(index))
    }

    pub fn from_xy(x: usize, y: usize) -> Option<Self> {
        if x >= BOARD_SIDE || y >= BOARD_SIDE {
            return None;
        }
        Some(Self(y * BOARD_SIDE + x))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn x(&self) -> usize {
        self.0 % BOARD_SIDE
    }

    pub fn y(&self) -> usize {
        self.0 / BOARD_SIDE
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsBot,
}

impl GameMode {
    /// Mark played by the automated side, if any.
    pub fn bot_mark(&self) -> Option<Mark> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsBot => Some(Mark::O),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::HumanVsHuman => write!(f, "Human vs Human"),
            GameMode::HumanVsBot => write!(f, "Human vs Bot"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreTally {
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(line) => match line.mark {
                Mark::X => self.x_wins += 1,
                Mark::O => self.o_wins += 1,
                Mark::Empty => {}
            },
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }
}
