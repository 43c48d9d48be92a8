use log::{debug, info};
use web_time::Instant;

use crate::config::ControllerConfig;
use crate::game::{MoveReport, NimGame};
use crate::selection::SelectOutcome;
use crate::timer::{TimerId, TimerQueue};
use crate::types::{Phase, Side, TokenView, View};

const HUMAN_WINS: &str = "You Win!";
const COMPUTER_WINS: &str = "Computer Wins!";

/// Work deferred to a later frame. Each entry remembers the game it
/// belongs to so that nothing scheduled before a restart can touch the
/// new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scheduled {
    AutomatedReply { generation: u64 },
    ClearMessage { generation: u64 },
}

/// Turns canvas input into engine calls and engine state into a view.
///
/// Every event method returns `true` when the host should redraw.
#[derive(Debug, Clone)]
pub struct Controller {
    config: ControllerConfig,
    game: NimGame,
    timers: TimerQueue<Scheduled>,
    reply_timer: Option<TimerId>,
    message_timer: Option<TimerId>,
    message: Option<String>,
}

impl Controller {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            game: NimGame::new(),
            timers: TimerQueue::new(),
            reply_timer: None,
            message_timer: None,
            message: None,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Replaces the settings; the game in progress is kept.
    pub fn set_config(&mut self, config: ControllerConfig) -> Result<(), String> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn game(&self) -> &NimGame {
        &self.game
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_reply_pending(&self) -> bool {
        self.reply_timer.is_some_and(|id| self.timers.is_pending(id))
    }

    pub fn click(&mut self, x: f64, y: f64) -> bool {
        let Some(token) = self.config.layout.pick_token(self.game.board(), x, y) else {
            return false;
        };
        self.select(token.pile, token.token).changed()
    }

    pub fn select(&mut self, pile: usize, token: u32) -> SelectOutcome {
        let outcome = self.game.select_token(pile, token);
        match outcome {
            SelectOutcome::Rejected(reason) => {
                debug!("ignored selection of pile {pile} token {token}: {reason:?}")
            }
            _ => debug!("pile {pile} token {token}: {outcome:?}"),
        }
        outcome
    }

    pub fn confirm(&mut self, now: Instant) -> bool {
        let Some(report) = self.game.commit_move() else {
            debug!("confirm ignored in {:?}", self.game.phase());
            return false;
        };
        log_move(&report);

        if report.terminal {
            self.show_message(HUMAN_WINS, now);
        } else {
            self.schedule_reply(now);
        }
        true
    }

    pub fn restart(&mut self) -> bool {
        self.clear_pending();
        self.game.reset();
        info!("game restarted");
        true
    }

    /// Restarts with the computer making the first move.
    pub fn computer_first(&mut self, now: Instant) -> bool {
        self.clear_pending();
        self.game.start_automated_first();
        info!("game restarted, computer moves first");
        self.schedule_reply(now);
        true
    }

    pub fn key_down(&mut self, key: &str) -> bool {
        if key.eq_ignore_ascii_case("r") {
            self.restart()
        } else {
            false
        }
    }

    /// Runs every timer that is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for (_, task) in self.timers.take_due(now) {
            changed |= self.fire(task, now);
        }
        changed
    }

    pub fn view(&self) -> View {
        let layout = &self.config.layout;
        let selection = self.game.selection();
        let tokens = layout
            .tokens(self.game.board())
            .into_iter()
            .map(|pos| TokenView {
                pile: pos.token.pile,
                token: pos.token.token,
                x: pos.x,
                y: pos.y,
                radius: layout.token_radius,
                selected: selection.contains(pos.token),
            })
            .collect();

        let phase = self.game.phase();
        let status = match phase {
            Phase::HumanTurn => "Your turn",
            Phase::AutomatedTurn => "Computer is thinking...",
            Phase::GameOver { .. } => "Game over",
        };

        View {
            state: self.game.to_game_state(),
            tokens,
            confirm_enabled: phase == Phase::HumanTurn && !selection.is_empty(),
            status: status.to_string(),
            message: self.message.clone(),
        }
    }

    fn fire(&mut self, task: Scheduled, now: Instant) -> bool {
        match task {
            Scheduled::AutomatedReply { generation } => {
                self.reply_timer = None;
                if generation != self.game.generation() {
                    debug!("dropping automated reply for game {generation}");
                    return false;
                }
                let Some(report) = self.game.play_automated_turn() else {
                    debug!("automated reply ignored in {:?}", self.game.phase());
                    return false;
                };
                log_move(&report);
                if report.terminal {
                    self.show_message(COMPUTER_WINS, now);
                }
                true
            }
            Scheduled::ClearMessage { generation } => {
                self.message_timer = None;
                if generation != self.game.generation() {
                    return false;
                }
                self.message.take().is_some()
            }
        }
    }

    fn schedule_reply(&mut self, now: Instant) {
        let task = Scheduled::AutomatedReply {
            generation: self.game.generation(),
        };
        self.reply_timer = Some(self.timers.schedule(task, self.config.reply_delay(), now));
    }

    fn show_message(&mut self, text: &str, now: Instant) {
        info!("{text}");
        if let Some(id) = self.message_timer.take() {
            self.timers.cancel(id);
        }
        self.message = Some(text.to_string());
        let task = Scheduled::ClearMessage {
            generation: self.game.generation(),
        };
        self.message_timer = Some(self.timers.schedule(task, self.config.message_duration(), now));
    }

    fn clear_pending(&mut self) {
        self.timers.cancel_all();
        self.reply_timer = None;
        self.message_timer = None;
        self.message = None;
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

fn log_move(report: &MoveReport) {
    let who = match report.side {
        Side::Human => "human",
        Side::Automated => "computer",
    };
    info!(
        "{who} took {} from pile {}, piles now {:?}",
        report.mv.count,
        report.mv.pile,
        report.board.piles()
    );
}
