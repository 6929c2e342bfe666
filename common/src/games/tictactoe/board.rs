use std::fmt;

use super::types::{BOARD_SIDE, CELL_COUNT, Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses a 9 character row-major layout of `X`, `O` and `.`.
    #[cfg(test)]
    pub fn from_layout(layout: &str) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let marks = layout.chars().filter(|c| !c.is_whitespace());
        for (cell, c) in cells.iter_mut().zip(marks) {
            *cell = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.index()]
    }

    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.index()] = mark;
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position) == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    Position::all().filter(|&pos| board.is_empty_at(pos)).collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    Position::new(index).is_some_and(|pos| board.is_empty_at(pos))
}
