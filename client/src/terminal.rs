use std::sync::{Arc, Mutex};

use common::games::tictactoe::{SessionDriver, SessionObserver, SessionSnapshot};
use common::{log, log_warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::render::render;

/// Prints every distinct snapshot to stdout.
#[derive(Clone, Default)]
pub struct TerminalObserver {
    last_shown: Arc<Mutex<Option<SessionSnapshot>>>,
}

impl TerminalObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn should_show(&self, snapshot: &SessionSnapshot) -> bool {
        let Ok(mut last_shown) = self.last_shown.lock() else {
            return true;
        };
        if last_shown.as_ref() == Some(snapshot) {
            return false;
        }
        *last_shown = Some(snapshot.clone());
        true
    }
}

impl SessionObserver for TerminalObserver {
    async fn on_state(&self, snapshot: SessionSnapshot) {
        if self.should_show(&snapshot) {
            println!("\n{}", render(&snapshot));
        }
    }
}

/// Reads commands from stdin until `q` or end of input, while the driver
/// runs the session in the background.
pub async fn run_terminal(
    driver: SessionDriver<TerminalObserver>,
    observer: TerminalObserver,
) -> std::io::Result<()> {
    let runner = tokio::spawn({
        let driver = driver.clone();
        async move { driver.run().await }
    });

    println!("{}", HELP_TEXT);
    observer.on_state(driver.snapshot().await).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let read_result = loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break Ok(()),
            Err(e) => break Err(e),
        };

        match parse_command(&line) {
            Ok(Command::Place(index)) => {
                if let Err(e) = driver.apply_move(index).await {
                    log!("Move ignored: {}", e);
                    println!("{}", e);
                }
            }
            Ok(Command::RestartRound) => driver.reset_round().await,
            Ok(Command::ResetScores) => driver.reset_session().await,
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(Command::Quit) => break Ok(()),
            Err(message) => println!("{}, type h for help", message),
        }
    };

    driver.exit().await;
    if let Err(e) = runner.await {
        log_warn!("Session loop failed: {}", e);
    }
    log!("Session closed");

    read_result
}
