// ABOUTME: Domain error types for the workspace database, window config, and resolver

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the model and resolver layers.
///
/// Every failure aborts the current request; nothing is caught and
/// suppressed above the data-model boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Database file missing required fields, an invalid workspace entry,
    /// or duplicate workspace names.
    #[error("malformed workspace database {}: {}", .path.display(), .reason)]
    MalformedDatabase { path: PathBuf, reason: String },

    /// Window config file missing `windows`, a non-singleton window entry,
    /// or a non-string command.
    #[error("malformed window config {}: {}", .path.display(), .reason)]
    MalformedConfig { path: PathBuf, reason: String },

    /// Name-based lookup found nothing.
    #[error("no workspace named '{}' in {}", .name, .database.display())]
    UnknownWorkspace { name: String, database: PathBuf },

    /// Root-based lookup did not find exactly one workspace.
    #[error("expected exactly 1 workspace rooted at {}, found {}", .path.display(), .count)]
    AmbiguousRoot { path: PathBuf, count: usize },

    /// Workspace root directory absent at start time.
    #[error("workspace root does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    /// A tmux invocation exited non-zero.
    #[error("tmux {directive} failed: {detail}")]
    ExternalTool { directive: String, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
