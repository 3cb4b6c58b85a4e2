//! Logger implementation for the log crate.
//!
//! The shell does not own a global output device, so records are formatted
//! and handed to a sink function registered by the platform in [`init`].

use core::fmt::{self, Display};

use lazyinit::LazyInit;
use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::ShellResult;

/// Receives one formatted log line, without line terminator.
pub type LogSink = fn(fmt::Arguments<'_>);

static LOG_SINK: LazyInit<LogSink> = LazyInit::new();

pub struct ShellLogger;

static LOGGER: ShellLogger = ShellLogger;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Cyan = 36,
    BrightBlack = 90,
}

impl Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{1B}[{}m", *self as u8)
    }
}

impl Log for ShellLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(sink) = LOG_SINK.get() else {
            return;
        };

        let level = record.level();
        let file = record.file().unwrap_or("none");
        let line = record.line().unwrap_or(0);
        let args = record.args();
        let color_reset = "\u{1B}[0m";

        let args_color = match level {
            Level::Error => ColorCode::Red,
            Level::Warn => ColorCode::Yellow,
            Level::Info => ColorCode::Green,
            Level::Debug => ColorCode::Cyan,
            Level::Trace => ColorCode::BrightBlack,
        };

        sink(format_args!(
            "[{level:<5} {file}:{line}] {args_color}{args}{color_reset}"
        ));
    }

    fn flush(&self) {}
}

/// Build-time log level, taken from the `LOG` environment variable.
fn max_level() -> LevelFilter {
    match option_env!("LOG") {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Initialize the logger, routing records to `sink`.
pub fn init(sink: LogSink) -> ShellResult<()> {
    install(sink, || log::set_logger(&LOGGER).is_ok())
}

/// Install `sink` once `set_logger` has accepted the logger.
fn install(sink: LogSink, set_logger: impl FnOnce() -> bool) -> ShellResult<()> {
    anyhow::ensure!(set_logger(), "another logger is installed");
    LOG_SINK.init_once(sink);
    log::set_max_level(max_level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discard(_args: fmt::Arguments<'_>) {}

    #[test]
    fn test_init_only_once() {
        let err = install(discard, || false).unwrap_err();
        assert!(err.to_string().contains("another logger is installed"));
        assert!(!LOG_SINK.is_inited());

        assert!(init(discard).is_ok());
        assert!(LOG_SINK.is_inited());
        let err = init(discard).unwrap_err();
        assert!(err.to_string().contains("another logger is installed"));
        info!("logged through the sink");
    }

    #[test]
    fn test_color_code_escape() {
        assert_eq!(ColorCode::Red.to_string(), "\u{1B}[31m");
    }
}
