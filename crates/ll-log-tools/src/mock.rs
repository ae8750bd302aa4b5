//! Mock line source for testing that serves pre-loaded log content.

use std::collections::HashMap;
use std::io::{BufRead, Cursor};

use crate::error::{LogError, LogResult};
use crate::source::LineSource;

/// A mock line source that serves pre-loaded content by path.
pub struct MockLineSource {
    files: HashMap<String, Vec<u8>>,
}

impl MockLineSource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Add a file with the given lines (newline-joined).
    pub fn add_file(&mut self, path: impl Into<String>, lines: Vec<String>) {
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        self.files.insert(path.into(), content.into_bytes());
    }

    /// Create a mock with a sample syslog file.
    pub fn with_syslog_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/syslog",
            vec![
                "Feb  4 08:00:01 web01 systemd[1]: Started Daily apt upgrade and clean activities".into(),
                "Feb  4 08:00:05 web01 app[2211]: Failed to connect to database: connection refused".into(),
                "Feb  4 08:10:10 web01 kernel: eth0: link up".into(),
                "Feb  4 09:00:15 web01 app[2211]: Warning: memory usage at 91%".into(),
                "Feb  4 09:00:20 web01 CRON[5678]: (root) CMD (/usr/bin/healthcheck)".into(),
                "Feb  4 09:30:25 web01 app[2211]: upstream timeout after 500ms".into(),
                "Feb  4 10:00:30 web01 systemd[1]: Started Session 42 of user deploy".into(),
                "Feb  4 10:00:35 web01 app[2211]: Failed to connect to database: connection refused".into(),
            ],
        );
        m
    }

    /// Create a mock with a sample nginx combined access log.
    pub fn with_nginx_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/nginx/access.log",
            vec![
                r#"192.168.1.5 - - [04/Feb/2026:08:15:30 +0800] "GET /api HTTP/1.1" 500 512 "-" "curl/8.0""#.into(),
                r#"192.168.1.6 - - [04/Feb/2026:08:15:31 +0800] "GET /index.html HTTP/1.1" 200 4096 "-" "Mozilla/5.0""#.into(),
                r#"192.168.1.5 - - [04/Feb/2026:08:16:02 +0800] "POST /api/login HTTP/1.1" 200 128 "https://example.com/" "Mozilla/5.0""#.into(),
                r#"192.168.1.7 - - [04/Feb/2026:09:01:44 +0800] "GET /missing HTTP/1.1" 404 0 "-" "Googlebot/2.1""#.into(),
                r#"192.168.1.5 - - [04/Feb/2026:09:02:10 +0800] "GET /api HTTP/1.1" 200 512 "-" "curl/8.0""#.into(),
            ],
        );
        m
    }

    /// Create a mock with a sample JSON lines file.
    pub fn with_json_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/app.json",
            vec![
                r#"{"timestamp":"2026-02-04T08:00:01Z","level":"info","message":"Service started"}"#.into(),
                r#"{"timestamp":"2026-02-04T08:00:05Z","level":"error","message":"Database connection lost"}"#.into(),
                r#"{"timestamp":"2026-02-04T08:00:10Z","level":"warning","message":"Slow query: 2300ms"}"#.into(),
                r#"{"timestamp":"2026-02-04T08:00:15Z","level":"info","message":"Cache warmed"}"#.into(),
                r#"{"broken json": }"#.into(),
            ],
        );
        m
    }

    /// Create a mock mixing every supported format plus noise.
    pub fn with_mixed_sample() -> Self {
        let mut m = Self::new();
        m.add_file(
            "/var/log/mixed.log",
            vec![
                "Feb  4 08:00:01 web01 sshd[812]: Accepted publickey for deploy".into(),
                r#"10.0.0.1 - - [04/Feb/2026:08:15:30 +0800] "GET / HTTP/1.1" 200 612 "-" "curl/8.0""#.into(),
                r#"10.0.0.2 - bob [04/Feb/2026:11:02:00 +0800] "GET /report HTTP/1.0" 200 2326"#.into(),
                r#"{"level":"info","msg":"tick"}"#.into(),
                "".into(),
                "free-form text without structure".into(),
            ],
        );
        m
    }
}

impl Default for MockLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for MockLineSource {
    fn open(&self, path: &str) -> LogResult<Box<dyn BufRead + Send>> {
        self.files
            .get(path)
            .map(|bytes| Box::new(Cursor::new(bytes.clone())) as Box<dyn BufRead + Send>)
            .ok_or_else(|| LogError::NotFound(path.to_string()))
    }
}
