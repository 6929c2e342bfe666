use super::board::Board;
use super::types::{GameStatus, Mark, Position, WinningLine};

/// Rows, columns, then diagonals. Scan order decides which line is reported
/// when a move completes two at once.
pub const LINES: [[Position; 3]; 8] = [
    [Position(0), Position(1), Position(2)],
    [Position(3), Position(4), Position(5)],
    [Position(6), Position(7), Position(8)],
    [Position(0), Position(3), Position(6)],
    [Position(1), Position(4), Position(7)],
    [Position(2), Position(5), Position(8)],
    [Position(0), Position(4), Position(8)],
    [Position(2), Position(4), Position(6)],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Win is checked before draw, so a final move that both completes a line
/// and fills the board counts as a win.
pub fn evaluate_status(board: &Board) -> GameStatus {
    if let Some(line) = check_win_with_line(board) {
        return GameStatus::Won(line);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &WinningLine) -> Vec<usize> {
        line.cells.iter().map(|p| p.index()).collect()
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Mark::O);
            }
            let found = check_win_with_line(&board).unwrap();
            assert_eq!(found.mark, Mark::O);
            assert_eq!(found.cells, line);
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_layout("XXO ... ...");
        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate_status(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_layout("XOX XOX OXO");
        assert_eq!(evaluate_status(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_takes_priority_over_full_board() {
        let board = Board::from_layout("XOX OXO OXX");
        let status = evaluate_status(&board);
        assert_eq!(status.winner(), Some(Mark::X));
        assert!(matches!(status, GameStatus::Won(line) if cells(&line) == vec![0, 4, 8]));
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        let board = Board::from_layout("XXX X.. X..");
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(cells(&line), vec![0, 1, 2]);
    }
}
