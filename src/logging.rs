//! Logging setup for the command-line front end.
//!
//! Terminal output gets info and above; when the user data directory is
//! writable, debug and above also go to
//! `<data dir>/frontdesk/frontdesk.log`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Path of the log file, when a data directory exists.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("frontdesk").join("frontdesk.log"))
}

fn config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build()
}

/// Initializes logging. Returns the log file path when file logging is
/// active.
pub fn init() -> Option<PathBuf> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        config(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_path = log_file_path().and_then(|path| {
        let parent = path.parent()?;
        fs::create_dir_all(parent).ok()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()?;
        loggers.push(WriteLogger::new(LevelFilter::Debug, config(), file));
        Some(path)
    });

    if CombinedLogger::init(loggers).is_err() {
        log::debug!("logger already initialized");
    }

    log_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path_ends_with_app_log() {
        if let Some(path) = log_file_path() {
            assert!(path.ends_with("frontdesk/frontdesk.log"));
        }
    }
}
