//! Structured error types for scaffolding

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("invalid project name '{0}': {1}")]
    InvalidProjectName(String, &'static str),

    #[error("directory '{0}' already exists")]
    DirectoryExists(PathBuf),

    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownChoice {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error("command `{command}` failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("failed to start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read answer file {}: {message}", path.display())]
    AnswerFile { path: PathBuf, message: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
