use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use log::{error, info, warn};

/// Explicit logging context for one pipeline run.
///
/// Console output goes through the `log` facade (configured once in
/// `main`); every message is also appended to the run's log file so
/// failures remain inspectable after the process exits. The context is
/// created at process start and passed by reference into each
/// component; it is never reconfigured mid-run.
pub struct LogContext {
    file: Option<File>,
}

impl LogContext {
    /// Open (or create) the log file at `path`. A file that cannot be
    /// opened degrades to console-only logging with a warning.
    pub fn init(path: &Path) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self { file: Some(file) },
            Err(e) => {
                warn!("Could not open log file {}: {}", path.display(), e);
                Self { file: None }
            }
        }
    }

    /// A context with no log file, for tests and library embedding.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn info(&self, message: &str) {
        info!("{}", message);
        self.append("INFO", message);
    }

    pub fn warn(&self, message: &str) {
        warn!("{}", message);
        self.append("WARN", message);
    }

    pub fn error(&self, message: &str) {
        error!("{}", message);
        self.append("ERROR", message);
    }

    fn append(&self, level: &str, message: &str) {
        if let Some(file) = &self.file {
            let mut writer = file;
            let _ = writeln!(
                writer,
                "{} [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                level,
                message
            );
        }
    }
}
