
use std::cell::RefCell;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use strum_macros::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Where a message goes. Stdout is never a target: it carries results only.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleAndFile,
    #[default]
    FileOnly,
}

enum SessionFile {
    Pending,
    Open { file: File, path: PathBuf },
    Unavailable,
}

/// Session logger: warnings and errors echoed on stderr, everything appended
/// to a per-session file that is only created once something is written.
pub struct Logger {
    file_enabled: bool,
    dir: PathBuf,
    file: RefCell<SessionFile>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            file_enabled: true,
            dir: PathBuf::from("logs"),
            file: RefCell::new(SessionFile::Pending),
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.record(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.record(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.record(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&mut self, enabled: bool) {
        self.file_enabled = enabled;
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled
    }

    /// Ignored once the session file has been opened (or failed to open).
    pub fn set_log_dir(&mut self, dir: impl AsRef<Path>) {
        if matches!(*self.file.borrow(), SessionFile::Pending) {
            self.dir = dir.as_ref().to_path_buf();
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        match &*self.file.borrow() {
            SessionFile::Open { path, .. } => Some(path.clone()),
            _ => None,
        }
    }

    fn record(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target == LogTarget::ConsoleAndFile && level != LogLevel::Info {
            eprintln!("{message}");
        }
        if !self.file_enabled {
            return;
        }

        let mut file = self.file.borrow_mut();
        if matches!(*file, SessionFile::Pending) {
            *file = match open_session_file(&self.dir) {
                Ok((handle, path)) => SessionFile::Open { file: handle, path },
                Err(err) => {
                    eprintln!(
                        "WARN: File logging unavailable; continuing without a log file. ({err})"
                    );
                    SessionFile::Unavailable
                }
            };
        }
        if let SessionFile::Open { file, .. } = &mut *file {
            let stamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let level = level.to_string();
            let _ = writeln!(file, "[{stamp}] {level:<5} {message}");
        }
    }
}

fn open_session_file(dir: &Path) -> std::io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("session-{stamp}.log"));
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("file_enabled", &self.file_enabled)
            .field("log_path", &self.log_path())
            .finish()
    }
}
