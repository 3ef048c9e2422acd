// ============================================================================
// dashpack-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and Optional File Logging
//
// Logging is configured exactly once, at startup, from an explicit
// LogConfig. The core library only emits through the `log` facade; this
// module decides where those records go and how they look.
//
// FORMAT:
//   2026-10-17 14:03:11 +0200 INFO    : executing ["ffmpeg", "-y", ...]
//
// The console sink writes to stderr (colored levels on a terminal). When a
// log directory is given, the same lines are also appended, uncolored, to
// dashpack_run_<timestamp>.log inside it.

use anyhow::{Context, Result};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Timestamp format used on every log line.
const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Where and how verbosely to log.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub verbose: bool,
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of the run log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("dashpack_run_{}.log", get_timestamp()))
}

/// Formats one log line without colors.
pub fn format_line(timestamp: &str, level: Level, message: &std::fmt::Arguments) -> String {
    format!("{timestamp} {:<8}: {message}", level.as_str())
}

fn colored_level(level: Level) -> String {
    let padded = format!("{:<8}", level.as_str());
    match level {
        Level::Error => padded.bright_red().to_string(),
        Level::Warn => padded.yellow().to_string(),
        Level::Info => padded.green().to_string(),
        Level::Debug => padded.blue().to_string(),
        Level::Trace => padded.magenta().to_string(),
    }
}

/// Installs the global logger. Returns the log file path, if one was opened.
pub fn init_logging(config: &LogConfig) -> Result<Option<PathBuf>> {
    let use_color = std::io::stderr().is_terminal();

    let console = fern::Dispatch::new()
        .format(move |out, message, record| {
            let timestamp = chrono::Local::now().format(LINE_TIMESTAMP_FORMAT).to_string();
            if use_color {
                out.finish(format_args!(
                    "{} {}: {}",
                    timestamp,
                    colored_level(record.level()),
                    message
                ))
            } else {
                out.finish(format_args!("{}", format_line(&timestamp, record.level(), message)))
            }
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new().level(config.level()).chain(console);

    let mut log_file = None;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory '{}'", dir.display()))?;
        let path = log_file_path(dir);
        let file = fern::log_file(&path)
            .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

        dispatch = dispatch.chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    let timestamp = chrono::Local::now().format(LINE_TIMESTAMP_FORMAT).to_string();
                    out.finish(format_args!("{}", format_line(&timestamp, record.level(), message)))
                })
                .chain(file),
        );
        log_file = Some(path);
    }

    dispatch.apply().context("Failed to install logger")?;
    Ok(log_file)
}
