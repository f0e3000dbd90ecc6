//! Raw response dumps for offline inspection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes every response body to `response{N}.html`, numbered from zero.
///
/// Each file is written under a temporary name and renamed into place, so
/// an interrupted run leaves either a complete dump or none.
#[derive(Debug, Clone)]
pub struct ResponseDump {
    dir: PathBuf,
    next: usize,
}

impl ResponseDump {
    /// Dump into `dir`, which must exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            next: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the next response. The number is used up even if writing fails.
    pub fn write(&mut self, body: &str) -> io::Result<PathBuf> {
        let n = self.next;
        self.next += 1;

        let path = self.dir.join(format!("response{n}.html"));
        let partial = self.dir.join(format!(".response{n}.html.part"));
        fs::write(&partial, body)?;
        fs::rename(&partial, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn numbers_files_in_order() {
        let dir = tempdir().unwrap();
        let mut dump = ResponseDump::new(dir.path());

        let first = dump.write("<html>0</html>").unwrap();
        let second = dump.write("<html>1</html>").unwrap();

        assert_eq!(first, dir.path().join("response0.html"));
        assert_eq!(second, dir.path().join("response1.html"));
        assert_eq!(fs::read_to_string(first).unwrap(), "<html>0</html>");
        assert_eq!(fs::read_to_string(second).unwrap(), "<html>1</html>");
    }

    #[test]
    fn leaves_no_partial_files() {
        let dir = tempdir().unwrap();
        let mut dump = ResponseDump::new(dir.path());
        dump.write("body").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["response0.html"]);
    }

    #[test]
    fn failed_write_still_advances() {
        let dir = tempdir().unwrap();
        let mut dump = ResponseDump::new(dir.path().join("missing"));
        assert!(dump.write("body").is_err());

        let mut dump = ResponseDump {
            dir: dir.path().to_path_buf(),
            next: dump.next,
        };
        let path = dump.write("body").unwrap();
        assert_eq!(path, dir.path().join("response1.html"));
    }
}
