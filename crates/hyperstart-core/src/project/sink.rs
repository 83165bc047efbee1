//! Filesystem primitives used by every writer
//!
//! `DiskSink` is the real filesystem. `MemorySink` keeps files in memory and
//! backs the unit and scenario tests.

use crate::error::{Result, ScaffoldError};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operations the generator is allowed to perform
pub trait FileSink {
    fn create_dir_all(&mut self, path: &Path) -> Result<()>;

    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn remove_file(&mut self, path: &Path) -> Result<()>;

    fn read_to_string(&self, path: &Path) -> Result<String>;
}

impl<T: FileSink + ?Sized> FileSink for &mut T {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        (**self).create_dir_all(path)
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        (**self).remove_file(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }
}

/// Pass-through to `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskSink;

impl FileSink for DiskSink {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, e))
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).map_err(|e| ScaffoldError::io(path, e))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| ScaffoldError::io(path, e))
    }
}

/// In-memory tree
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a file in place without going through a writer (for pre-existing scaffold files)
    pub fn seed(&mut self, path: impl Into<PathBuf>, contents: &str) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir_chain(parent);
        }
        self.files.insert(path, contents.to_string());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().map(|(p, c)| (p.as_path(), c.as_str()))
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.contains(path.as_ref())
    }

    fn add_dir_chain(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn not_found(path: &Path) -> ScaffoldError {
        ScaffoldError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

impl FileSink for MemorySink {
    fn create_dir_all(&mut self, path: &Path) -> Result<()> {
        self.add_dir_chain(path);
        Ok(())
    }

    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.dirs.contains(parent) => {
                Err(Self::not_found(parent))
            }
            _ => {
                self.files.insert(path.to_path_buf(), contents.to_string());
                Ok(())
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn remove_file(&mut self, path: &Path) -> Result<()> {
        self.files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(path))
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_requires_parent_dir() {
        let mut sink = MemorySink::new();
        assert!(sink.write(Path::new("app/src/main.jsx"), "x").is_err());

        sink.create_dir_all(Path::new("app/src")).unwrap();
        sink.write(Path::new("app/src/main.jsx"), "x").unwrap();
        assert_eq!(sink.file("app/src/main.jsx"), Some("x"));
        assert!(sink.is_dir("app"));
    }

    #[test]
    fn test_memory_sink_remove_missing_file_errors() {
        let mut sink = MemorySink::new();
        assert!(sink.remove_file(Path::new("nope.css")).is_err());
    }

    #[test]
    fn test_disk_sink_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DiskSink;
        let nested = dir.path().join("src/utils");
        sink.create_dir_all(&nested).unwrap();

        let file = nested.join("axiosInstance.js");
        sink.write(&file, "export const api = {};").unwrap();
        assert!(sink.exists(&file));
        assert_eq!(sink.read_to_string(&file).unwrap(), "export const api = {};");

        sink.remove_file(&file).unwrap();
        assert!(!sink.exists(&file));
    }
}
