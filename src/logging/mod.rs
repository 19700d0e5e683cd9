
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.pad(label)
    }
}

#[derive(Debug, Copy, Clone)]
pub enum LogTarget {
    ConsoleOnly,
    ConsoleAndFile,
    FileOnly,
}

impl Default for LogTarget {
    fn default() -> Self {
        LogTarget::ConsoleAndFile
    }
}

impl LogTarget {
    fn console(self) -> bool {
        matches!(self, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile)
    }
    fn file(self) -> bool {
        matches!(self, LogTarget::FileOnly | LogTarget::ConsoleAndFile)
    }
}

/// Session log file, opened on the first file-targeted record.
struct SessionFile {
    dir: PathBuf,
    opened: Option<(File, PathBuf)>,
    failed: bool,
}

impl SessionFile {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            opened: None,
            failed: false,
        }
    }

    fn open(dir: &Path) -> std::io::Result<(File, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("lockerlog-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }

    fn write_line(&mut self, line: &str) {
        if self.opened.is_none() && !self.failed {
            match Self::open(&self.dir) {
                Ok(opened) => self.opened = Some(opened),
                Err(err) => {
                    self.failed = true;
                    eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                }
            }
        }
        if let Some((file, _)) = self.opened.as_mut() {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// Console and session-file logger. Info goes to stdout, warnings and errors
/// to stderr. Cloning shares the same session file.
#[derive(Clone)]
pub struct Logger {
    component: &'static str,
    session: Arc<Mutex<SessionFile>>,
    file_enabled: Arc<AtomicBool>,
}

impl Logger {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            session: Arc::new(Mutex::new(SessionFile::new(PathBuf::from("logs")))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Same session file, different component label.
    pub fn for_component(&self, component: &'static str) -> Self {
        Self {
            component,
            ..self.clone()
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if target.console() {
            match level {
                LogLevel::Info => println!("{message}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
            }
        }

        if target.file() && self.file_enabled.load(Ordering::SeqCst) {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let line = format!("[{timestamp}] {:<5} {}: {message}", level, self.component);
            if let Ok(mut session) = self.session.lock() {
                session.write_line(&line);
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    /// Only takes effect before the session file has been opened.
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Ok(mut session) = self.session.lock() {
            if session.opened.is_none() {
                session.dir = dir.as_ref().to_path_buf();
                session.failed = false;
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.session.lock().ok().map(|s| s.dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.session
            .lock()
            .ok()
            .and_then(|s| s.opened.as_ref().map(|(_, path)| path.clone()))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("component", &self.component)
            .field("log_path", &self.log_path())
            .finish()
    }
}
