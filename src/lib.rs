//! Flappy - Terminal Flappy Bird Library
//!
//! This module exposes the simulation, session and screen routing for
//! testing and for the terminal binary.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod session;
pub mod ui;
pub mod utils;

pub use app::{App, Screen};
pub use config::{parse_args, AppConfig, Command};
pub use error::{ConfigError, StorageError};
