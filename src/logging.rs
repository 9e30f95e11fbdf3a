//! Tracing setup for the terminal binary.
//!
//! The terminal belongs to the UI, so events go to `<data_dir>/flappy.log`.
//! When that file cannot be opened they are discarded and the game runs on.

use crate::config::AppConfig;
use crate::utils::persistence;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Open `path` for appending, creating its directory first.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        persistence::ensure_dir(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Returns the error that forced logging
/// into the sink, if any.
pub fn init_logging(config: &AppConfig) -> Option<io::Error> {
    let (writer, failure) = match open_log_file(&config.log_path()) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Err(err) => (BoxMakeWriter::new(io::sink), Some(err)),
    };

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();
    if installed.is_err() {
        tracing::debug!("Subscriber already installed");
    }

    failure
}
