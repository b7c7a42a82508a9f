//! Rolling File Logger
//!
//! Installs a `tracing` subscriber that writes to a daily-rolled log file and
//! keeps the most recent lines in a circular buffer. Records emitted through
//! the `log` facade are bridged into the same subscriber.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Rolled files kept next to the active one
pub const DEFAULT_MAX_FILES: usize = 7;
/// Lines kept in memory for `recent_lines`
pub const DEFAULT_BUFFER_LINES: usize = 500;

static RECENT: OnceLock<Arc<Mutex<LogBuffer>>> = OnceLock::new();

/// Bounded ring of the latest log lines
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push one line, evicting the oldest when full
    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `<dir>/<prefix>.<date>.log`, pruned to `max_files`
fn open_appender(
    dir: &Path,
    prefix: &str,
    rotation: Rotation,
    max_files: usize,
) -> Result<RollingFileAppender, String> {
    RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .max_log_files(max_files)
        .build(dir)
        .map_err(|e| format!("Failed to open log file in {}: {}", dir.display(), e))
}

/// Writer handed to the subscriber: file plus in-memory ring
struct TeeWriter<W> {
    file: W,
    recent: Arc<Mutex<LogBuffer>>,
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        if let Ok(mut recent) = self.recent.lock() {
            for line in String::from_utf8_lossy(&buf[..n]).lines() {
                if !line.is_empty() {
                    recent.push(line.to_string());
                }
            }
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Initialize the global logger writing into `log_dir/<app_name>.<date>.log`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    let file = open_appender(&log_dir, app_name, Rotation::DAILY, DEFAULT_MAX_FILES)?;

    let recent = RECENT
        .get_or_init(|| Arc::new(Mutex::new(LogBuffer::new(DEFAULT_BUFFER_LINES))))
        .clone();

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(TeeWriter { file, recent }))
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    log::info!(
        "[{}] {} logging to {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        app_name,
        log_dir.display()
    );
    Ok(())
}

pub fn info(msg: &str) {
    tracing::info!("{}", msg);
}

/// Most recent log lines, oldest first. Empty before `init_logger`.
pub fn recent_lines() -> Vec<String> {
    RECENT
        .get()
        .and_then(|recent| recent.lock().ok().map(|buffer| buffer.lines()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = LogBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity_buffer_stays_empty() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("a".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_tee_writer_records_lines() {
        let dir = tempfile::tempdir().unwrap();
        let file = open_appender(dir.path(), "tee", Rotation::NEVER, 1).unwrap();
        let recent = Arc::new(Mutex::new(LogBuffer::new(8)));
        let mut writer = TeeWriter { file, recent: recent.clone() };

        writer.write_all(b"first line\nsecond line\n").unwrap();
        writer.flush().unwrap();

        let lines = recent.lock().unwrap().lines();
        assert_eq!(lines, vec!["first line".to_string(), "second line".to_string()]);
        let written = fs::read_to_string(dir.path().join("tee.log")).unwrap();
        assert_eq!(written, "first line\nsecond line\n");
    }

    #[test]
    fn test_daily_appender_names_file_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = open_appender(dir.path(), "app", Rotation::DAILY, 3).unwrap();

        file.write_all(b"hello\n").unwrap();
        file.flush().unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("app."));
        assert!(names[0].ends_with(".log"));
    }
}
