//! Drives a `FlappyGame` from wall-clock time and input events.
//!
//! The runner owns the tick scheduler and runs the phase-entry side effects:
//! the scheduler starts when a run begins, and stops the moment the phase
//! leaves `Running`. Entering `Over` records the score with the session.

use super::logic::{self, FlappyInput, InputResult, TickResult};
use super::scheduler::TickScheduler;
use super::types::{FlappyGame, GameConfig, GameOverCause, Phase};
use crate::session::ScoreSink;
use rand::Rng;
use std::time::Duration;

/// Everything that happened during one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunnerReport {
    pub ticks: u32,
    pub scored: u32,
    pub game_over: Option<GameOverCause>,
    /// The finished run beat the stored high score.
    pub new_high_score: bool,
}

#[derive(Debug, Clone)]
pub struct GameRunner {
    game: FlappyGame,
    scheduler: TickScheduler,
    new_high_score: bool,
}

impl Default for GameRunner {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: FlappyGame::new(config),
            scheduler: TickScheduler::default(),
            new_high_score: false,
        }
    }

    pub fn with_scheduler(config: GameConfig, scheduler: TickScheduler) -> Self {
        Self {
            game: FlappyGame::new(config),
            scheduler,
            new_high_score: false,
        }
    }

    pub fn game(&self) -> &FlappyGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut FlappyGame {
        &mut self.game
    }

    pub fn phase(&self) -> Phase {
        self.game.phase
    }

    /// True while the scheduler is producing ticks.
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Whether the last finished run set a new high score.
    pub fn is_new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn until_next_tick(&self) -> Option<Duration> {
        self.scheduler.until_next_tick()
    }

    /// The single "activate" entry point (Space or click).
    pub fn on_jump(&mut self) -> InputResult {
        let result = logic::process_input(&mut self.game, FlappyInput::Activate);
        self.after_input(result);
        result
    }

    /// "Play again" from the game-over panel.
    pub fn on_restart(&mut self) -> InputResult {
        let result = logic::process_input(&mut self.game, FlappyInput::Restart);
        self.after_input(result);
        result
    }

    /// Run however many ticks `elapsed` wall time is worth.
    pub fn advance<R: Rng>(
        &mut self,
        elapsed: Duration,
        rng: &mut R,
        sink: &mut dyn ScoreSink,
    ) -> RunnerReport {
        let mut report = RunnerReport::default();
        let due = self.scheduler.due_ticks(elapsed);

        for _ in 0..due {
            if !self.scheduler.is_running() {
                break;
            }
            let tick = self.step(rng, sink);
            report.ticks += 1;
            report.scored += tick.scored;
            if let Some(cause) = tick.game_over {
                report.game_over = Some(cause);
                report.new_high_score = self.new_high_score;
            }
        }

        report
    }

    /// Run exactly one tick, bypassing the scheduler's clock.
    ///
    /// Still a no-op unless the game is running.
    pub fn step<R: Rng>(&mut self, rng: &mut R, sink: &mut dyn ScoreSink) -> TickResult {
        let result = logic::process_tick(&mut self.game, rng);
        if result.game_over.is_some() {
            self.enter_over(sink);
        }
        result
    }

    /// Stop ticking for good, e.g. when the game screen is left.
    pub fn teardown(&mut self) {
        self.scheduler.stop();
    }

    fn after_input(&mut self, result: InputResult) {
        match result {
            InputResult::Started | InputResult::Restarted => self.enter_running(),
            InputResult::Jumped | InputResult::Ignored => {}
        }
    }

    fn enter_running(&mut self) {
        tracing::debug!("Run started");
        self.new_high_score = false;
        self.scheduler.start();
    }

    fn enter_over(&mut self, sink: &mut dyn ScoreSink) {
        self.scheduler.stop();
        self.new_high_score = sink.record_score_if_higher(self.game.score);
        tracing::info!(
            score = self.game.score,
            cause = ?self.game.game_over_cause,
            new_high_score = self.new_high_score,
            "Run ended"
        );
    }
}
