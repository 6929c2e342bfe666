use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify};

use crate::games::SessionRng;
use crate::{log, log_debug, log_warn};
use super::bot_controller::calculate_move;
use super::error::GameError;
use super::remarks::RemarkCatalog;
use super::session::{BotTurnResult, SessionSnapshot, TicTacToeSession};
use super::types::GameStatus;

pub const DEFAULT_THINKING_DELAY_MIN: Duration = Duration::from_millis(1000);
pub const DEFAULT_THINKING_DELAY_MAX: Duration = Duration::from_millis(1800);
pub const DEFAULT_ROUND_RESET_DELAY: Duration = Duration::from_millis(2500);

/// Receives a fresh snapshot after every change to the session.
pub trait SessionObserver: Send + Sync + Clone + 'static {
    fn on_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone)]
pub struct DriverSettings {
    pub thinking_delay_min: Duration,
    pub thinking_delay_max: Duration,
    pub round_reset_delay: Duration,
    pub remarks: RemarkCatalog,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            thinking_delay_min: DEFAULT_THINKING_DELAY_MIN,
            thinking_delay_max: DEFAULT_THINKING_DELAY_MAX,
            round_reset_delay: DEFAULT_ROUND_RESET_DELAY,
            remarks: RemarkCatalog::default(),
        }
    }
}

/// Owns a session and runs its turn loop: bot searches happen on the
/// blocking pool, finished rounds advance after `round_reset_delay`.
#[derive(Clone)]
pub struct SessionDriver<O: SessionObserver> {
    session: Arc<Mutex<TicTacToeSession>>,
    rng: Arc<Mutex<SessionRng>>,
    settings: Arc<DriverSettings>,
    turn_notify: Arc<Notify>,
    observer: O,
}

impl<O: SessionObserver> SessionDriver<O> {
    pub fn new(session: TicTacToeSession, settings: DriverSettings, rng: SessionRng, observer: O) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            rng: Arc::new(Mutex::new(rng)),
            settings: Arc::new(settings),
            turn_notify: Arc::new(Notify::new()),
            observer,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn apply_move(&self, index: usize) -> Result<GameStatus, GameError> {
        let result = self.session.lock().await.apply_move(index);
        if result.is_ok() {
            self.wake().await;
        }
        result
    }

    pub async fn reset_round(&self) {
        self.session.lock().await.reset_round();
        self.wake().await;
    }

    pub async fn reset_session(&self) {
        self.session.lock().await.reset_session();
        self.wake().await;
    }

    pub async fn exit(&self) {
        self.session.lock().await.exit();
        self.wake().await;
    }

    /// Drives the session until it is exited.
    pub async fn run(&self) {
        let mode = self.session.lock().await.mode();
        log_debug!("Driving {} session", mode);

        loop {
            let (active, status, is_bot_turn, generation) = {
                let session = self.session.lock().await;
                (
                    session.is_active(),
                    session.status(),
                    session.is_bot_turn(),
                    session.generation(),
                )
            };

            if !active {
                break;
            }

            if status.is_over() {
                tokio::select! {
                    _ = tokio::time::sleep(self.settings.round_reset_delay) => {
                        let advanced = self.session.lock().await.reset_round_if_current(generation);
                        if advanced {
                            self.publish().await;
                        }
                    }
                    _ = self.turn_notify.notified() => {}
                }
            } else if is_bot_turn {
                self.play_bot_turn().await;
            } else {
                self.turn_notify.notified().await;
            }
        }
    }

    async fn play_bot_turn(&self) {
        let Some(ticket) = self.session.lock().await.begin_bot_turn() else {
            return;
        };
        log_debug!("Bot search started, generation {}", ticket.generation());
        self.publish().await;

        let (delay, turn_seed) = {
            let mut rng = self.rng.lock().await;
            let delay = self.thinking_delay(&mut rng);
            (delay, rng.random_range(0..u64::MAX))
        };
        tokio::time::sleep(delay).await;

        let settings = self.settings.clone();
        let input = *ticket.input();
        let calculated_move = tokio::task::spawn_blocking(move || {
            let mut turn_rng = SessionRng::new(turn_seed);
            calculate_move(&input, &settings.remarks, &mut turn_rng)
        })
        .await;

        {
            let mut session = self.session.lock().await;
            match calculated_move {
                Ok(Ok(bot_move)) => {
                    let position = bot_move.position;
                    let bot_mark = ticket.input().bot_mark;
                    match session.complete_bot_turn(ticket, bot_move) {
                        Ok(BotTurnResult::Applied(_)) => {
                            log!("{} placed {} at {}", session.labels().for_mark(bot_mark), bot_mark, position)
                        }
                        Ok(BotTurnResult::Discarded) => log!("Bot move at {} discarded, round changed", position),
                        Err(e) => {
                            log_warn!("Bot failed to place mark at {}: {}", position, e);
                            session.abort_bot_turn(&ticket);
                        }
                    }
                }
                Ok(Err(e)) => {
                    log_warn!("Bot search failed: {}", e);
                    session.abort_bot_turn(&ticket);
                }
                Err(e) => {
                    log_warn!("Bot search task failed: {}", e);
                    session.abort_bot_turn(&ticket);
                }
            }
        }

        self.publish().await;
    }

    fn thinking_delay(&self, rng: &mut SessionRng) -> Duration {
        let min = self.settings.thinking_delay_min;
        let max = self.settings.thinking_delay_max;
        if max <= min {
            return min;
        }
        let millis = rng.random_range(min.as_millis() as u64..=max.as_millis() as u64);
        Duration::from_millis(millis)
    }

    async fn wake(&self) {
        self.turn_notify.notify_one();
        self.publish().await;
    }

    async fn publish(&self) {
        let snapshot = self.session.lock().await.snapshot();
        self.observer.on_state(snapshot).await;
    }
}
