//! Process-wide `log` backend shared by `ts-server` and `ts-sim`.

use crate::{ConfigError, ConfigErrorResult, LogLevel};

use std::fmt::{Arguments, Display};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Where log lines end up. stdout is never used; `ts-sim` prints JSON there.
enum Sink {
    File(PathBuf, File),
    ColoredStderr(ColoredLevelConfig),
    Stderr,
}

impl Sink {
    fn open(log_file: Option<PathBuf>, colored: bool) -> ConfigErrorResult<Self> {
        match log_file {
            Some(path) => {
                let file = open_append(&path)?;
                Ok(Self::File(path, file))
            }
            None if colored => Ok(Self::ColoredStderr(
                ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red),
            )),
            None => Ok(Self::Stderr),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::File(path, _) => format!("file={}", path.display()),
            Self::ColoredStderr(_) | Self::Stderr => String::from("stderr"),
        }
    }

    fn into_dispatch(self) -> Dispatch {
        match self {
            Self::File(_, file) => Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(file),
            Self::ColoredStderr(colors) => Dispatch::new()
                .format(move |out, message, record| {
                    write_line(out, message, record, colors.color(record.level()))
                })
                .chain(std::io::stderr()),
            Self::Stderr => Dispatch::new()
                .format(|out, message, record| write_line(out, message, record, record.level()))
                .chain(std::io::stderr()),
        }
    }
}

fn open_append(path: &Path) -> ConfigErrorResult<File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ConfigError::logging(format!(
                "Failed to open log file {}: {}",
                path.display(),
                e
            ))
        })
}

/// `[<rfc3339> - <LEVEL>] <message> [<file>:<line>]`
fn write_line(out: FormatCallback, message: &Arguments, record: &Record, level: impl Display) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Install the global `log` backend. Fails if one is already installed.
///
/// A log file wins over console output; `colored` only affects stderr.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ConfigErrorResult<()> {
    let level_filter = log_level.0;
    let sink = Sink::open(log_file, colored)?;
    let destination = sink.describe();

    Dispatch::new()
        .level(level_filter)
        .chain(sink.into_dispatch())
        .apply()
        .map_err(|e| ConfigError::logging(format!("Failed to initialize logger: {e}")))?;

    info!("Logger initialized: level={:?}, {}", level_filter, destination);

    Ok(())
}
