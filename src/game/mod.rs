//! Flappy Bird simulation.
//!
//! A fixed-step simulation: every 20ms tick the bird falls under gravity,
//! pipes scroll left, passed pipes score a point and any contact with a pipe,
//! the ground or the ceiling ends the run. Input sets the bird's velocity to
//! an upward impulse.

pub mod logic;
pub mod runner;
pub mod scheduler;
pub mod types;

pub use logic::*;
pub use runner::*;
pub use scheduler::*;
pub use types::*;
