//! Runtime configuration from command line arguments and the environment.

use crate::constants::{DATA_DIR_NAME, LOGIN_LATENCY_MS, LOG_FILE_NAME, STORAGE_KEY};
use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Overrides the data directory (profile record and log file).
pub const HOME_ENV: &str = "FLAPPY_HOME";
/// `EnvFilter` directive for the log file.
pub const LOG_ENV: &str = "FLAPPY_LOG";
pub const DEFAULT_LOG_FILTER: &str = "flappy=info";

pub const HELP_TEXT: &str = "\
Flappy - terminal Flappy Bird with a local player profile

Usage: flappy [options]

Options:
  --data-dir <path>  Where the profile and log file live (default ~/.flappy)
  --no-latency       Skip the simulated login delay
  --version, -v      Show version information
  --help, -h         Show this help message

Environment:
  FLAPPY_HOME        Same as --data-dir
  FLAPPY_LOG         Log filter, e.g. flappy=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub simulate_latency: bool,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(AppConfig),
    Version,
    Help,
}

impl AppConfig {
    /// Config rooted at `data_dir` with default settings.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            simulate_latency: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", STORAGE_KEY))
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Delay applied to login and registration.
    pub fn login_latency(&self) -> Duration {
        if self.simulate_latency {
            Duration::from_millis(LOGIN_LATENCY_MS)
        } else {
            Duration::ZERO
        }
    }
}

/// Parse arguments (without the program name). `env` looks up environment
/// variables so tests can run without touching the real environment.
pub fn parse_args<I, F>(args: I, env: F) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut data_dir: Option<PathBuf> = None;
    let mut simulate_latency = true;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--no-latency" => simulate_latency = false,
            "--data-dir" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--data-dir"))?;
                data_dir = Some(PathBuf::from(value));
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    let data_dir = match data_dir {
        Some(dir) => dir,
        None => match env(HOME_ENV).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .ok_or(ConfigError::NoHomeDir)?
                .join(DATA_DIR_NAME),
        },
    };

    let log_filter = env(LOG_ENV)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    Ok(Command::Run(AppConfig {
        data_dir,
        simulate_latency,
        log_filter,
    }))
}
