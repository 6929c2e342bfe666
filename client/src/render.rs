use std::fmt::Write;

use common::games::tictactoe::{BOARD_SIDE, GameStatus, Mark, Position, SessionSnapshot};

/// Text view of a session. Empty cells show the number used to claim them.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    let labels = &snapshot.labels;

    let _ = writeln!(out, "== {} ==", snapshot.mode);
    let _ = writeln!(
        out,
        "{} (X) {} : {} {} (O)   draws: {}",
        labels.player_x,
        snapshot.tally.wins_for(Mark::X),
        snapshot.tally.wins_for(Mark::O),
        labels.player_o,
        snapshot.tally.draws
    );
    let _ = writeln!(out);

    let winning_line = match snapshot.status {
        GameStatus::Won(line) => Some(line),
        _ => None,
    };

    for y in 0..BOARD_SIDE {
        let row: Vec<String> = (0..BOARD_SIDE)
            .filter_map(|x| Position::from_xy(x, y))
            .map(|position| {
                let mark = snapshot.board.get(position);
                match mark {
                    Mark::Empty => format!(" {} ", position.index() + 1),
                    _ if winning_line.is_some_and(|line| line.contains(position)) => format!("[{}]", mark),
                    _ => format!(" {} ", mark),
                }
            })
            .collect();
        let _ = writeln!(out, " {}", row.join("|"));
        if y + 1 < BOARD_SIDE {
            let _ = writeln!(out, " {}", vec!["---"; BOARD_SIDE].join("+"));
        }
    }
    let _ = writeln!(out);

    if !snapshot.active {
        let _ = writeln!(out, "Session ended.");
        return out;
    }

    match snapshot.status {
        GameStatus::InProgress if snapshot.search_pending => {
            let _ = writeln!(out, "{} playing...", labels.for_mark(snapshot.current_mark));
        }
        GameStatus::InProgress => {
            let _ = writeln!(
                out,
                "{} ({}) to move",
                labels.for_mark(snapshot.current_mark),
                snapshot.current_mark
            );
        }
        GameStatus::Won(line) => {
            let _ = writeln!(out, "WINNER: {} ({})", labels.for_mark(line.mark), line.mark);
            let _ = writeln!(out, "Starting next round...");
        }
        GameStatus::Draw => {
            let _ = writeln!(out, "DRAW");
            let _ = writeln!(out, "Starting next round...");
        }
    }

    if let (Some(remark), Some(bot_mark)) = (snapshot.last_remark.as_deref(), snapshot.mode.bot_mark()) {
        if !remark.is_empty() {
            let _ = writeln!(out, "{}: \"{}\"", labels.for_mark(bot_mark), remark);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameMode, TicTacToeSession};

    fn session_after(mode: GameMode, moves: &[usize]) -> TicTacToeSession {
        let player_o = match mode {
            GameMode::HumanVsHuman => Some("Bob".to_string()),
            GameMode::HumanVsBot => None,
        };
        let mut session = TicTacToeSession::start(mode, Some("Alice".to_string()), player_o);
        for &index in moves {
            session.apply_move(index).unwrap();
        }
        session
    }

    #[test]
    fn test_fresh_session_shows_numbers_and_turn() {
        let text = render(&session_after(GameMode::HumanVsHuman, &[]).snapshot());
        assert!(text.contains("== Human vs Human =="));
        assert!(text.contains("Alice (X) 0 : 0 Bob (O)   draws: 0"));
        assert!(text.contains(" 1 | 2 | 3 "));
        assert!(text.contains(" 7 | 8 | 9 "));
        assert!(text.contains("Alice (X) to move"));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let text = render(&session_after(GameMode::HumanVsHuman, &[0, 3, 1, 4, 2]).snapshot());
        assert!(text.contains("[X]|[X]|[X]"));
        assert!(text.contains(" O | O | 6 "));
        assert!(text.contains("WINNER: Alice (X)"));
        assert!(text.contains("Starting next round..."));
        assert!(text.contains("Alice (X) 1 : 0 Bob (O)"));
    }

    #[test]
    fn test_draw_banner() {
        let text = render(&session_after(GameMode::HumanVsHuman, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).snapshot());
        assert!(text.contains("DRAW"));
        assert!(text.contains("draws: 1"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_pending_search_shows_bot_playing() {
        let mut session = session_after(GameMode::HumanVsBot, &[0]);
        assert!(session.begin_bot_turn().is_some());
        let text = render(&session.snapshot());
        assert!(text.contains("Bot playing..."));
        assert!(text.contains("Alice (X) 0 : 0 Bot (O)"));
    }

    #[test]
    fn test_remark_is_attributed_to_bot() {
        let mut snapshot = session_after(GameMode::HumanVsBot, &[0]).snapshot();
        snapshot.last_remark = Some("Block!".to_string());
        let text = render(&snapshot);
        assert!(text.contains("Bot: \"Block!\""));
    }

    #[test]
    fn test_exited_session() {
        let mut session = session_after(GameMode::HumanVsHuman, &[4]);
        session.exit();
        let text = render(&session.snapshot());
        assert!(text.contains("Session ended."));
        assert!(!text.contains("to move"));
    }
}
