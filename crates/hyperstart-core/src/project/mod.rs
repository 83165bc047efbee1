//! The project root and every change made under it

pub mod layout;
pub mod sink;

pub use layout::Layout;
pub use sink::{DiskSink, FileSink, MemorySink};

use crate::error::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// A change made to the project tree, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    CreatedDir(String),
    Wrote(String),
    Patched(String),
    Removed(String),
}

impl FileChange {
    pub fn path(&self) -> &str {
        match self {
            FileChange::CreatedDir(p)
            | FileChange::Wrote(p)
            | FileChange::Patched(p)
            | FileChange::Removed(p) => p,
        }
    }
}

impl fmt::Display for FileChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileChange::CreatedDir(p) => write!(f, "created {}/", p),
            FileChange::Wrote(p) => write!(f, "wrote {}", p),
            FileChange::Patched(p) => write!(f, "patched {}", p),
            FileChange::Removed(p) => write!(f, "removed {}", p),
        }
    }
}

/// All writes go through here. Paths are relative to the root, `/`-separated.
pub struct Project<S: FileSink> {
    root: PathBuf,
    layout: Layout,
    sink: S,
    changes: Vec<FileChange>,
}

impl<S: FileSink> Project<S> {
    pub fn new(root: impl Into<PathBuf>, layout: Layout, sink: S) -> Self {
        Self {
            root: root.into(),
            layout,
            sink,
            changes: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn changes(&self) -> &[FileChange] {
        &self.changes
    }

    pub fn into_parts(self) -> (S, Vec<FileChange>) {
        (self.sink, self.changes)
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.sink.exists(&self.path(relative))
    }

    /// First candidate that exists, else the first candidate
    pub fn resolve(&self, candidates: &[&'static str]) -> &'static str {
        candidates
            .iter()
            .copied()
            .find(|c| self.exists(c))
            .unwrap_or(candidates[0])
    }

    /// Create a directory (and parents). Existing directories are left alone.
    pub fn create_dir(&mut self, relative: &str) -> Result<()> {
        let path = self.path(relative);
        if self.sink.exists(&path) {
            return Ok(());
        }
        self.sink.create_dir_all(&path)?;
        self.changes.push(FileChange::CreatedDir(relative.to_string()));
        Ok(())
    }

    /// Overwrite a file, creating its parent directory first
    pub fn write(&mut self, relative: &str, contents: &str) -> Result<()> {
        if let Some((parent, _)) = relative.rsplit_once('/') {
            self.create_dir(parent)?;
        }
        let path = self.path(relative);
        self.sink.write(&path, contents)?;
        self.changes.push(FileChange::Wrote(relative.to_string()));
        Ok(())
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        self.sink.read_to_string(&self.path(relative))
    }

    /// Read-modify-write. Writes only when the text changed; a missing file is left missing.
    pub fn patch<F>(&mut self, relative: &str, edit: F) -> Result<bool>
    where
        F: FnOnce(&str) -> String,
    {
        if !self.exists(relative) {
            return Ok(false);
        }
        let before = self.read(relative)?;
        let after = edit(&before);
        if after == before {
            return Ok(false);
        }
        self.sink.write(&self.path(relative), &after)?;
        self.changes.push(FileChange::Patched(relative.to_string()));
        Ok(true)
    }

    pub fn remove_if_exists(&mut self, relative: &str) -> Result<bool> {
        let path = self.path(relative);
        if !self.sink.exists(&path) {
            return Ok(false);
        }
        self.sink.remove_file(&path)?;
        self.changes.push(FileChange::Removed(relative.to_string()));
        Ok(true)
    }
}
