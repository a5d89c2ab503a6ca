//! Process logger for Renamer With Subs
//!
//! Records go through the `log` facade. Each one is filtered and printed by an
//! `env_logger` console logger (filter taken from `RWS_LOG`) and then handed to
//! a writer thread that appends it to a log file, so the UI thread never waits
//! on disk.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;

use log::{Level, Log, Metadata, Record};
use once_cell::sync::OnceCell;

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use crate::error::LoggingError;

enum LogMessage {
    Line(String),
    Shutdown,
}

/// Appends lines to the log file from a background thread
struct FileSink {
    sender: Mutex<mpsc::Sender<LogMessage>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl FileSink {
    fn spawn(file: File) -> Self {
        let (tx, rx) = mpsc::channel::<LogMessage>();
        let handle = std::thread::spawn(move || {
            let mut writer = BufWriter::new(file);
            while let Ok(first) = rx.recv() {
                // Write everything already queued, then flush once
                let mut shutdown = false;
                for msg in std::iter::once(first).chain(rx.try_iter()) {
                    match msg {
                        LogMessage::Line(line) => {
                            let _ = writeln!(writer, "{}", line);
                        }
                        LogMessage::Shutdown => {
                            shutdown = true;
                            break;
                        }
                    }
                }
                let _ = writer.flush();
                if shutdown {
                    return;
                }
            }
        });
        FileSink {
            sender: Mutex::new(tx),
            handle: Mutex::new(Some(handle)),
        }
    }

    fn send(&self, line: String) {
        if let Ok(sender) = self.sender.lock() {
            let _ = sender.send(LogMessage::Line(line));
        }
    }

    fn shutdown(&self) {
        if let Ok(sender) = self.sender.lock() {
            let _ = sender.send(LogMessage::Shutdown);
        }
        let handle = self.handle.lock().ok().and_then(|mut guard| guard.take());
        if let Some(handle) = handle {
            let _ = handle.join();
        }
    }
}

/// Console logger plus optional log file
pub struct AppLogger {
    console: env_logger::Logger,
    file: Option<FileSink>,
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.console.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.console.matches(record) {
            return;
        }
        self.console.log(record);
        if let Some(file) = &self.file {
            let now = chrono::Local::now().naive_local();
            file.send(format_line(
                record.level(),
                record.target(),
                &record.args().to_string(),
                &now,
            ));
        }
    }

    fn flush(&self) {
        self.console.flush();
    }
}

static LOGGER: OnceCell<AppLogger> = OnceCell::new();

/// Layout of one line in the log file
pub fn format_line(level: Level, target: &str, message: &str, at: &chrono::NaiveDateTime) -> String {
    format!("[{} {} {}] {}", level, at.format("%Y-%m-%d %H:%M:%S"), target, message)
}

/// Where the log file lives on this platform
pub fn log_file_path() -> Result<PathBuf, LoggingError> {
    #[cfg(windows)]
    {
        let exe_path = std::env::current_exe()?;
        let exe_dir = exe_path.parent().ok_or(LoggingError::NoLogDir)?;
        Ok(exe_dir.join("renamer_with_subs_log.txt"))
    }

    #[cfg(not(windows))]
    {
        // XDG cache directory, falling back to the home directory
        let app_dir = match xdg::BaseDirectories::new() {
            Ok(xdg_dirs) => xdg_dirs.get_cache_home().join("renamer-with-subs"),
            Err(_) => dirs::home_dir()
                .ok_or(LoggingError::NoLogDir)?
                .join(".renamer-with-subs"),
        };
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("renamer-with-subs.log"))
    }
}

fn open_log_file() -> Result<File, LoggingError> {
    let path = log_file_path()?;
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

fn build_logger() -> AppLogger {
    let console = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(LOG_ENV_VAR, DEFAULT_LOG_FILTER),
    )
    .build();
    let file = match open_log_file() {
        Ok(file) => Some(FileSink::spawn(file)),
        Err(e) => {
            eprintln!("Log file unavailable, logging to console only: {}", e);
            None
        }
    };
    AppLogger { console, file }
}

/// Install the process-wide logger
pub fn setup_logging() -> Result<(), LoggingError> {
    let logger = LOGGER.get_or_init(build_logger);
    log::set_logger(logger)?;
    log::set_max_level(logger.console.filter());
    Ok(())
}

/// Flush the log file and stop its writer thread
pub fn shutdown_logging() {
    if let Some(file) = LOGGER.get().and_then(|logger| logger.file.as_ref()) {
        file.shutdown();
    }
}
