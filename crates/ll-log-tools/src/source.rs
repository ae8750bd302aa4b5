//! Line source abstraction: open log input from files, gzip archives,
//! stdin, or in-memory mocks.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{LogError, LogResult};

/// Path token that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Abstraction for opening a forward-only line stream.
///
/// Mirrors `MockLineSource` for tests. The returned reader is owned by the
/// caller and released when dropped.
pub trait LineSource: Send + Sync {
    /// Open the given path/identifier for reading.
    fn open(&self, path: &str) -> LogResult<Box<dyn BufRead + Send>>;
}

/// Reads logs from the local filesystem or standard input.
///
/// `-` selects stdin, `*.gz` is decompressed on the fly, anything else is
/// read as plain text.
pub struct FileLineSource;

impl FileLineSource {
    pub fn is_gzip(path: &str) -> bool {
        path.ends_with(".gz")
    }
}

impl LineSource for FileLineSource {
    fn open(&self, path: &str) -> LogResult<Box<dyn BufRead + Send>> {
        if path == STDIN_PATH {
            // Dropping `Stdin` does not close the inherited descriptor.
            return Ok(Box::new(BufReader::new(std::io::stdin())));
        }

        let file = File::open(path).map_err(|e| LogError::io(path, e))?;
        if Self::is_gzip(path) {
            tracing::debug!(path, "reading gzip-compressed input");
            let decoder = MultiGzDecoder::new(BufReader::new(file));
            Ok(Box::new(BufReader::new(decoder)))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::{Read, Write};

    #[test]
    fn missing_file_is_not_found() {
        let err = match FileLineSource.open("/definitely/not/here.log") {
            Err(e) => e,
            Ok(_) => panic!("expected open to fail"),
        };
        assert!(matches!(err, LogError::NotFound(_)));
    }

    #[test]
    fn reads_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "one\ntwo\n").unwrap();

        let mut content = String::new();
        FileLineSource
            .open(path.to_str().unwrap())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "one\ntwo\n");
    }

    #[test]
    fn decompresses_gzip_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log.gz");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"compressed line\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        let mut content = String::new();
        FileLineSource
            .open(path.to_str().unwrap())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "compressed line\n");
    }

    #[test]
    fn gzip_detection() {
        assert!(FileLineSource::is_gzip("/var/log/nginx/access.log.2.gz"));
        assert!(!FileLineSource::is_gzip("/var/log/nginx/access.log"));
    }
}
