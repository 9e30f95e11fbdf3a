// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 20;
pub const MAX_CATCH_UP_TICKS: u32 = 10; // after a stall, drop anything beyond 200ms

// Playfield (logical pixels)
pub const PLAYFIELD_WIDTH: f64 = 400.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 80.0;

// Bird
pub const BIRD_X: f64 = 60.0;
pub const BIRD_WIDTH: f64 = 60.0;
pub const BIRD_HEIGHT: f64 = 45.0;
pub const BIRD_START_Y: f64 = 250.0;
pub const GRAVITY: f64 = 0.6;
pub const JUMP_FORCE: f64 = -10.0;
pub const ROTATION_PER_VELOCITY: f64 = 3.0;
pub const MIN_ROTATION_DEG: f64 = -30.0;
pub const MAX_ROTATION_DEG: f64 = 90.0;

// Pipes
pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_SPEED: f64 = 3.0;
pub const SPAWN_DISTANCE: f64 = 250.0;
pub const MIN_TOP_HEIGHT: f64 = 80.0;
pub const TOP_HEIGHT_RESERVE: f64 = 200.0; // top margin + ground + bottom margin
pub const HITBOX_INSET: f64 = 5.0;

// Session
pub const STORAGE_KEY: &str = "flappyUser";
pub const LOGIN_LATENCY_MS: u64 = 500;
pub const USER_ID_PREFIX: &str = "user_";

// Files
pub const DATA_DIR_NAME: &str = ".flappy";
pub const LOG_FILE_NAME: &str = "flappy.log";
