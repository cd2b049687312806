//! Leveled host logger
//!
//! The host exposes info/warning/error/success channels. [`TracingLogger`]
//! forwards them to `tracing`; [`MemoryLogger`] keeps them for inspection.

use std::cell::RefCell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Success => "success",
        };
        f.write_str(label)
    }
}

pub trait HostLogger {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }
}

/// Forwards host log channels to `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl HostLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::Success => tracing::info!(outcome = "success", "{}", message),
        }
    }
}

/// Records every entry; also forwards to `tracing` at debug level.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries.borrow().iter().filter(|(entry_level, _)| *entry_level == level).count()
    }
}

impl HostLogger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        tracing::debug!(%level, "{}", message);
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
