// ABOUTME: Attach-or-start resolution for workspace sessions
//
// Resolves a workspace reference against the database, then either attaches
// to the already-live session or creates a detached one, configures it from
// the workspace's window configuration and raw tmux source file, and
// attaches. The live-session set is snapshotted by the caller and passed in
// as data, so resolution never races a second tmux query.

use crate::config::{TMUXRC_FILE, WINDOWS_FILE};
use crate::error::{Error, Result};
use crate::models::{Configuration, Database, Workspace};
use crate::tmux::Multiplexer;
use std::path::Path;
use tracing::{debug, info};

/// How a request names its workspace.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Exact workspace name.
    Name(&'a str),
    /// Workspace whose root matches this path.
    Root(&'a Path),
}

/// Resolve a target reference to exactly one workspace.
///
/// Root matching is strict: zero matches and multiple matches are both
/// `AmbiguousRoot`, never a first-match pick.
pub fn resolve_target<'a>(database: &'a Database, target: Target<'_>) -> Result<&'a Workspace> {
    match target {
        Target::Name(name) => {
            database
                .find_by_name(name)
                .ok_or_else(|| Error::UnknownWorkspace {
                    name: name.to_string(),
                    database: database.path().to_path_buf(),
                })
        }
        Target::Root(path) => {
            let matches = database.find_by_root(path);
            if matches.len() == 1 {
                Ok(matches[0])
            } else {
                Err(Error::AmbiguousRoot {
                    path: path.to_path_buf(),
                    count: matches.len(),
                })
            }
        }
    }
}

/// Attach to the workspace's session, starting and configuring it first
/// when its name is not in the `live` set.
pub fn attach_or_start(
    mux: &impl Multiplexer,
    workspace: &Workspace,
    live: &[String],
) -> Result<()> {
    if live.iter().any(|name| name == &workspace.name) {
        debug!("session '{}' is live, attaching", workspace.name);
        return mux.attach(&workspace.name);
    }

    // The session is never created when the root is gone.
    if !workspace.root.is_dir() {
        return Err(Error::MissingRoot(workspace.root.clone()));
    }

    info!("starting session '{}'", workspace.name);
    mux.new_session(&workspace.name, &workspace.root)?;

    let config_path = workspace.root.join(WINDOWS_FILE);
    if config_path.is_file() {
        let configuration = Configuration::load(&config_path)?;
        mux.apply(&workspace.name, &workspace.root, &configuration.compile())?;
    }

    if workspace.root.join(TMUXRC_FILE).is_file() {
        mux.source_file(&workspace.root, Path::new(TMUXRC_FILE))?;
    }

    mux.attach(&workspace.name)
}
