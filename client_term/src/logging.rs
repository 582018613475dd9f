//! Log file setup
//!
//! The terminal is owned by the renderer, so log output goes to a plain-text
//! file through a non-blocking writer. Logging is best effort: if the file
//! cannot be opened the game still runs, just without a log.

use std::ffi::OsStr;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Keeps the background log writer alive; drop it last
pub struct LogGuard {
    _file_guard: WorkerGuard,
}

pub fn log_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

pub fn init_logging(path: &Path, debug: bool) -> LogGuard {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("pong.log"))
        .to_string_lossy()
        .into_owned();

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory);

    let (writer, file_guard) = match appender {
        Ok(appender) => tracing_appender::non_blocking(appender),
        Err(_) => tracing_appender::non_blocking(std::io::sink()),
    };

    // A subscriber may already be installed (tests, embedding); keep going either way
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(log_level(debug))
        .with_writer(writer)
        .try_init();

    LogGuard {
        _file_guard: file_guard,
    }
}
