// ABOUTME: Fixed file locations for the workspace database and per-workspace files

use crate::error::{Error, Result};
use std::io;
use std::path::PathBuf;

/// Basename of the per-workspace window configuration file.
pub const WINDOWS_FILE: &str = ".twsm.yml";

/// Basename of the per-workspace raw tmux source file, passed verbatim to
/// `tmux source-file`.
pub const TMUXRC_FILE: &str = ".tmuxrc";

/// Default workspace database location, under the user's home directory.
pub fn default_database_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "could not determine home directory",
        ))
    })?;
    Ok(home.join(".twsm").join("workspaces.yml"))
}
