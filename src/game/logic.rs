//! Game logic for Flappy Bird: input handling, the fixed tick, collisions.

use super::types::{FlappyGame, GameConfig, GameOverCause, Phase};
use crate::constants::{MAX_ROTATION_DEG, MIN_ROTATION_DEG, ROTATION_PER_VELOCITY};
use rand::Rng;

/// Input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space or a click on the play surface.
    Activate,
    /// "Play again" on the game-over panel.
    Restart,
}

/// What an input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Idle → Running.
    Started,
    /// Upward impulse applied.
    Jumped,
    /// Over → Idle → Running with fresh state.
    Restarted,
    Ignored,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// Pipes passed this tick.
    pub scored: u32,
    pub spawned: bool,
    /// Set on the tick that ended the run.
    pub game_over: Option<GameOverCause>,
}

/// Process player input.
///
/// Activation starts a run from `Idle`, jumps while `Running` and restarts
/// from `Over`. Every activation while running applies the impulse again.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) -> InputResult {
    match (input, game.phase) {
        (FlappyInput::Activate, Phase::Idle) => {
            start_run(game);
            InputResult::Started
        }
        (FlappyInput::Activate, Phase::Running) => {
            jump(game);
            InputResult::Jumped
        }
        (_, Phase::Over) => {
            restart(game);
            InputResult::Restarted
        }
        (FlappyInput::Restart, _) => InputResult::Ignored,
    }
}

/// Reset transient state and begin running.
pub fn start_run(game: &mut FlappyGame) {
    game.reset();
    game.phase = Phase::Running;
}

/// Back to `Idle`, then straight into a fresh run.
pub fn restart(game: &mut FlappyGame) {
    game.phase = Phase::Idle;
    start_run(game);
}

/// Override the bird's velocity with the jump impulse.
pub fn jump(game: &mut FlappyGame) {
    game.bird.velocity = game.config.jump_force;
}

/// Advance the game by one tick. Does nothing unless running.
///
/// Order matters: the bounds check runs on the tentative position before
/// gravity, and a bounds violation ends the tick without moving the bird
/// or the pipes.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) -> TickResult {
    let mut result = TickResult::default();
    if game.phase != Phase::Running {
        return result;
    }

    let cfg = game.config;
    game.tick_count += 1;

    // Bird
    let next_y = game.bird.y + game.bird.velocity;
    if is_out_of_bounds(&cfg, next_y) {
        end_run(game, GameOverCause::OutOfBounds);
        result.game_over = Some(GameOverCause::OutOfBounds);
        return result;
    }
    game.bird.y = next_y;
    game.bird.velocity += cfg.gravity;
    game.bird.rotation = rotation_for(game.bird.velocity);

    // Score against the position from before this tick's scroll
    for pipe in &mut game.pipes {
        if !pipe.passed && pipe.x + cfg.pipe_width < cfg.bird_x {
            pipe.passed = true;
            result.scored += 1;
        }
        pipe.x -= cfg.pipe_speed;
    }
    game.score += result.scored;

    game.pipes.retain(|p| p.x + cfg.pipe_width > 0.0);

    let should_spawn = match game.pipes.last() {
        None => true,
        Some(newest) => newest.x < cfg.width - cfg.spawn_distance,
    };
    if should_spawn {
        game.spawn_pipe(rng);
        result.spawned = true;
    }

    if check_collision(game) {
        end_run(game, GameOverCause::Collision);
        result.game_over = Some(GameOverCause::Collision);
    }

    result
}

/// The bird may not touch the ground line or the ceiling.
pub fn is_out_of_bounds(config: &GameConfig, y: f64) -> bool {
    y >= config.floor_limit() || y <= 0.0
}

/// Tilt in degrees for a vertical velocity.
pub fn rotation_for(velocity: f64) -> f64 {
    (velocity * ROTATION_PER_VELOCITY).clamp(MIN_ROTATION_DEG, MAX_ROTATION_DEG)
}

/// Check the bird against every pipe.
///
/// Both hitboxes are inset from the drawn sprites so near misses survive.
pub fn check_collision(game: &FlappyGame) -> bool {
    let cfg = &game.config;
    let inset = cfg.hitbox_inset;

    let bird_left = cfg.bird_x + inset;
    let bird_right = bird_left + cfg.bird_width - 2.0 * inset;
    let bird_top = game.bird.y + inset;
    let bird_bottom = game.bird.y + cfg.bird_height - inset;

    game.pipes.iter().any(|pipe| {
        let pipe_left = pipe.x + inset;
        let pipe_right = pipe.x + cfg.pipe_width - inset;

        bird_right > pipe_left
            && bird_left < pipe_right
            && (bird_top < pipe.top_height || bird_bottom > pipe.gap_bottom(cfg))
    })
}

fn end_run(game: &mut FlappyGame, cause: GameOverCause) {
    game.phase = Phase::Over;
    game.game_over_cause = Some(cause);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Pipe;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn running_game() -> FlappyGame {
        let mut game = FlappyGame::default();
        start_run(&mut game);
        game
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_activate_starts_game() {
        let mut game = FlappyGame::default();
        assert_eq!(process_input(&mut game, FlappyInput::Activate), InputResult::Started);
        assert_eq!(game.phase, Phase::Running);
        // Starting does not jump.
        assert_eq!(game.bird.velocity, 0.0);
    }

    #[test]
    fn test_activate_while_running_overrides_velocity() {
        let mut game = running_game();
        game.bird.velocity = 5.4;
        assert_eq!(process_input(&mut game, FlappyInput::Activate), InputResult::Jumped);
        assert_eq!(game.bird.velocity, -10.0);

        // Not debounced and not additive.
        process_input(&mut game, FlappyInput::Activate);
        assert_eq!(game.bird.velocity, -10.0);
    }

    #[test]
    fn test_restart_input_ignored_unless_over() {
        let mut game = FlappyGame::default();
        assert_eq!(process_input(&mut game, FlappyInput::Restart), InputResult::Ignored);
        assert_eq!(game.phase, Phase::Idle);

        let mut game = running_game();
        assert_eq!(process_input(&mut game, FlappyInput::Restart), InputResult::Ignored);
        assert_eq!(game.phase, Phase::Running);
    }

    #[test]
    fn test_activate_when_over_restarts() {
        let mut game = running_game();
        game.score = 3;
        game.phase = Phase::Over;
        assert_eq!(process_input(&mut game, FlappyInput::Activate), InputResult::Restarted);
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_no_tick_when_idle_or_over() {
        let mut game = FlappyGame::default();
        let before = game.bird;
        assert_eq!(process_tick(&mut game, &mut rng()), TickResult::default());
        assert_eq!(game.bird, before);
        assert!(game.pipes.is_empty());

        game.phase = Phase::Over;
        process_tick(&mut game, &mut rng());
        assert_eq!(game.bird, before);
        assert_eq!(game.tick_count, 0);
    }

    #[test]
    fn test_tick_applies_position_then_gravity() {
        let mut game = running_game();
        game.bird.velocity = 2.0;
        process_tick(&mut game, &mut rng());
        assert!((game.bird.y - 252.0).abs() < 1e-9);
        assert!((game.bird.velocity - 2.6).abs() < 1e-9);
        assert!((game.bird.rotation - 7.8).abs() < 1e-9);
    }

    #[test]
    fn test_rotation_clamped() {
        assert_eq!(rotation_for(-10.0), -30.0);
        assert_eq!(rotation_for(0.0), 0.0);
        assert_eq!(rotation_for(40.0), 90.0);
        assert!((rotation_for(5.0) - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_ground_ends_run_without_moving_bird() {
        let mut game = running_game();
        game.bird.y = 470.0;
        game.bird.velocity = 6.0;
        game.pipes.push(Pipe::new(300.0, 100.0));

        let result = process_tick(&mut game, &mut rng());
        assert_eq!(result.game_over, Some(GameOverCause::OutOfBounds));
        assert_eq!(game.phase, Phase::Over);
        assert_eq!(game.bird.y, 470.0);
        // Gravity is skipped on the fatal tick.
        assert_eq!(game.bird.velocity, 6.0);
        // Pipes don't move either.
        assert_eq!(game.pipes[0].x, 300.0);
    }

    #[test]
    fn test_exactly_at_floor_limit_is_fatal() {
        let mut game = running_game();
        game.bird.y = 474.0;
        game.bird.velocity = 1.0;
        process_tick(&mut game, &mut rng());
        assert_eq!(game.phase, Phase::Over);
        assert_eq!(game.bird.y, 474.0);
    }

    #[test]
    fn test_ceiling_ends_run() {
        let mut game = running_game();
        game.bird.y = 5.0;
        game.bird.velocity = -10.0;
        let result = process_tick(&mut game, &mut rng());
        assert_eq!(result.game_over, Some(GameOverCause::OutOfBounds));
        assert_eq!(game.bird.y, 5.0);
    }

    #[test]
    fn test_pipe_scores_once() {
        let mut game = running_game();
        // Trailing edge already behind the lane: -21 + 80 = 59 < 60.
        game.pipes.push(Pipe::new(-21.0, 100.0));
        game.pipes.push(Pipe::new(300.0, 200.0));

        let first = process_tick(&mut game, &mut rng());
        assert_eq!(first.scored, 1);
        assert_eq!(game.score, 1);
        assert!(game.pipes[0].passed);
        assert_eq!(game.pipes[0].x, -24.0);

        let second = process_tick(&mut game, &mut rng());
        assert_eq!(second.scored, 0);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_pipe_at_lane_edge_not_yet_scored() {
        let mut game = running_game();
        // -20 + 80 = 60 is not strictly behind the lane.
        game.pipes.push(Pipe::new(-20.0, 100.0));
        game.pipes.push(Pipe::new(300.0, 200.0));
        process_tick(&mut game, &mut rng());
        assert_eq!(game.score, 0);
        assert!(!game.pipes[0].passed);

        // Now at -23, so the next tick counts it.
        let next = process_tick(&mut game, &mut rng());
        assert_eq!(next.scored, 1);
    }

    #[test]
    fn test_pipe_crossing_lane_scores_on_following_tick() {
        let mut game = running_game();
        // Scrolls from -18 to -21 this tick; the point is not counted yet.
        game.pipes.push(Pipe::new(-18.0, 100.0));
        game.pipes.push(Pipe::new(300.0, 200.0));

        let first = process_tick(&mut game, &mut rng());
        assert_eq!(first.scored, 0);
        assert_eq!(game.pipes[0].x, -21.0);

        let second = process_tick(&mut game, &mut rng());
        assert_eq!(second.scored, 1);
    }

    #[test]
    fn test_offscreen_pipes_removed() {
        let mut game = running_game();
        game.pipes.push(Pipe::new(-77.0, 100.0));
        game.pipes.push(Pipe::new(300.0, 200.0));
        process_tick(&mut game, &mut rng());
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, 297.0);
    }

    #[test]
    fn test_spawn_when_empty() {
        let mut game = running_game();
        let result = process_tick(&mut game, &mut rng());
        assert!(result.spawned);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, 400.0);
    }

    #[test]
    fn test_spawn_threshold() {
        let mut game = running_game();
        game.pipes.push(Pipe::new(153.0, 200.0));
        // 153 - 3 = 150, exactly the threshold: no spawn.
        let result = process_tick(&mut game, &mut rng());
        assert!(!result.spawned);

        // 147 < 150: spawn.
        let result = process_tick(&mut game, &mut rng());
        assert!(result.spawned);
        assert_eq!(game.pipes.len(), 2);
    }

    #[test]
    fn test_collision_with_top_segment() {
        let mut game = running_game();
        game.bird.y = 250.0;
        game.pipes.push(Pipe::new(60.0, 300.0));
        assert!(check_collision(&game));
    }

    #[test]
    fn test_collision_with_bottom_segment() {
        let mut game = running_game();
        game.bird.y = 250.0;
        // Gap 50..250; bird bottom hitbox at 290.
        game.pipes.push(Pipe::new(60.0, 50.0));
        assert!(check_collision(&game));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut game = running_game();
        game.bird.y = 250.0;
        game.pipes.push(Pipe::new(60.0, 200.0));
        assert!(!check_collision(&game));
    }

    #[test]
    fn test_hitbox_inset_forgives_edge_overlap() {
        let mut game = running_game();
        game.bird.y = 250.0;
        // Visual overlap of 9px: bird spans 60..120, pipe starts at 111.
        // Inset hitboxes: bird right 115, pipe left 116.
        game.pipes.push(Pipe::new(111.0, 400.0));
        assert!(!check_collision(&game));

        game.pipes[0].x = 109.0;
        assert!(check_collision(&game));
    }

    #[test]
    fn test_tick_collision_ends_run() {
        let mut game = running_game();
        game.pipes.push(Pipe::new(63.0, 400.0));
        let result = process_tick(&mut game, &mut rng());
        assert_eq!(result.game_over, Some(GameOverCause::Collision));
        assert_eq!(game.phase, Phase::Over);
        assert_eq!(game.game_over_cause, Some(GameOverCause::Collision));
    }
}
