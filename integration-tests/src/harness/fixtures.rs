use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder for one Apache access-log line on 19/Oct/2025.
#[derive(Debug, Clone)]
pub struct AccessLine {
    ip: String,
    hour: u32,
    minute: u32,
    method: String,
    path: String,
    status: u16,
    size: u64,
}

impl AccessLine {
    pub fn get(path: &str) -> Self {
        Self {
            ip: "10.0.0.1".to_string(),
            hour: 14,
            minute: 0,
            method: "GET".to_string(),
            path: path.to_string(),
            status: 200,
            size: 512,
        }
    }

    pub fn post(path: &str) -> Self {
        Self {
            method: "POST".to_string(),
            ..Self::get(path)
        }
    }

    pub fn from_ip(mut self, ip: &str) -> Self {
        self.ip = ip.to_string();
        self
    }

    pub fn at(mut self, hour: u32, minute: u32) -> Self {
        self.hour = hour;
        self.minute = minute;
        self
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn render(&self) -> String {
        format!(
            r#"{} - - [19/Oct/2025:{:02}:{:02}:00 +0000] "{} {} HTTP/1.1" {} {}"#,
            self.ip, self.hour, self.minute, self.method, self.path, self.status, self.size
        )
    }

    /// `n` copies, each terminated by a newline.
    pub fn repeat(&self, n: usize) -> String {
        let mut out = String::new();
        for _ in 0..n {
            let _ = writeln!(out, "{}", self.render());
        }
        out
    }
}

/// Access log and cursor file in a private temp dir.
pub struct LogFile {
    _dir: TempDir,
    log: PathBuf,
    cursor: PathBuf,
}

impl LogFile {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("access.log");
        let cursor = dir.path().join("logshipper-position.txt");
        Self {
            _dir: dir,
            log,
            cursor,
        }
    }

    pub fn path(&self) -> &Path {
        &self.log
    }

    pub fn cursor_path(&self) -> &Path {
        &self.cursor
    }

    pub fn append(&self, text: &str) {
        let mut f = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log)
            .expect("open log");
        f.write_all(text.as_bytes()).expect("append log");
    }

    pub fn truncate_with(&self, text: &str) {
        std::fs::write(&self.log, text).expect("rewrite log");
    }

    pub fn len(&self) -> u64 {
        std::fs::metadata(&self.log).map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn persisted_cursor(&self) -> Option<u64> {
        std::fs::read_to_string(&self.cursor)
            .ok()
            .and_then(|s| s.trim().parse().ok())
    }
}

impl Default for LogFile {
    fn default() -> Self {
        Self::new()
    }
}
