//! Flappy Bird data structures.
//!
//! All positions are logical pixels on a playfield whose origin is the top
//! left corner; y grows downward.

use crate::constants::*;
use rand::Rng;

/// Tuning for one game. `Default` gives the classic values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub ground_height: f64,

    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub bird_start_y: f64,
    /// Velocity added per tick.
    pub gravity: f64,
    /// Velocity set by a jump (negative = upward).
    pub jump_force: f64,

    pub pipe_width: f64,
    pub pipe_gap: f64,
    /// Pixels scrolled per tick.
    pub pipe_speed: f64,
    /// A new pipe spawns once the newest one is this far in from the right edge.
    pub spawn_distance: f64,
    pub min_top_height: f64,
    /// Height excluded from the random top-segment range.
    pub top_height_reserve: f64,
    /// Hitboxes shrink by this much on each side.
    pub hitbox_inset: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bird_start_y: BIRD_START_Y,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_speed: PIPE_SPEED,
            spawn_distance: SPAWN_DISTANCE,
            min_top_height: MIN_TOP_HEIGHT,
            top_height_reserve: TOP_HEIGHT_RESERVE,
            hitbox_inset: HITBOX_INSET,
        }
    }
}

impl GameConfig {
    /// Lowest y the bird may occupy before touching the ground.
    pub fn floor_limit(&self) -> f64 {
        self.height - self.bird_height - self.ground_height
    }

    /// Height of the lower pipe segment for a given upper segment.
    pub fn bottom_height(&self, top_height: f64) -> f64 {
        self.height - top_height - self.pipe_gap - self.ground_height
    }

    /// Top of the ground strip.
    pub fn ground_y(&self) -> f64 {
        self.height - self.ground_height
    }
}

/// Game phase. `Idle` waits for the first input, `Over` for a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Over,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Hit the ground or the ceiling.
    OutOfBounds,
    /// Hit a pipe.
    Collision,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top edge of the sprite.
    pub y: f64,
    /// Pixels per tick (positive = downward).
    pub velocity: f64,
    /// Degrees, derived from velocity. Display only.
    pub rotation: f64,
}

impl Bird {
    pub fn at_start(config: &GameConfig) -> Self {
        Self {
            y: config.bird_start_y,
            velocity: 0.0,
            rotation: 0.0,
        }
    }
}

/// A pipe pair. The gap starts at `top_height` and is `pipe_gap` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Left edge.
    pub x: f64,
    pub top_height: f64,
    /// Set once the pipe's trailing edge is behind the bird.
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f64, top_height: f64) -> Self {
        Self {
            x,
            top_height,
            passed: false,
        }
    }

    pub fn bottom_height(&self, config: &GameConfig) -> f64 {
        config.bottom_height(self.top_height)
    }

    /// y where the lower segment begins.
    pub fn gap_bottom(&self, config: &GameConfig) -> f64 {
        self.top_height + config.pipe_gap
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: GameConfig,
    pub phase: Phase,
    pub bird: Bird,
    /// Oldest first; the last entry is the most recently spawned.
    pub pipes: Vec<Pipe>,
    /// Pipes passed this run.
    pub score: u32,
    pub game_over_cause: Option<GameOverCause>,
    /// Ticks simulated this run.
    pub tick_count: u64,
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl FlappyGame {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            bird: Bird::at_start(&config),
            pipes: Vec::new(),
            score: 0,
            game_over_cause: None,
            tick_count: 0,
        }
    }

    /// Reset everything a run changes. The phase is left alone.
    pub fn reset(&mut self) {
        self.bird = Bird::at_start(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.game_over_cause = None;
        self.tick_count = 0;
    }

    /// Spawn a pipe at the right edge with a random gap position.
    ///
    /// The top segment is at least `min_top_height` tall, and the range is
    /// narrowed so the bottom segment stays visible above the ground.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let cfg = &self.config;
        let span = (cfg.height - cfg.pipe_gap - cfg.top_height_reserve).floor();
        let top_height = if span >= 1.0 {
            cfg.min_top_height + rng.gen_range(0..span as u32) as f64
        } else {
            cfg.min_top_height
        };

        tracing::debug!(top_height, "Spawning pipe");
        self.pipes.push(Pipe::new(cfg.width, top_height));
    }
}
