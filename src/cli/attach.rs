// ABOUTME: CLI attach-workspace command - attach to or start a workspace session
//
// Resolves the workspace by name or by root path, snapshots the live tmux
// session set once, then hands off to the resolver. On success the process
// has been replaced by the tmux client and never returns here.

use anyhow::{Context, Result};
use std::path::Path;

use super::AttachArgs;
use crate::models::Database;
use crate::resolver::{self, Target};
use crate::tmux::{Multiplexer, Tmux};

/// Execute the attach-workspace command
pub fn execute(database_path: &Path, args: &AttachArgs) -> Result<()> {
    let database = Database::load(database_path).with_context(|| {
        format!("failed to load workspace database {}", database_path.display())
    })?;

    let target = if let Some(ref root) = args.root {
        Target::Root(root)
    } else if let Some(ref name) = args.workspace {
        Target::Name(name)
    } else {
        // clap enforces name-xor-root; this is the unreachable arm
        anyhow::bail!("a workspace name or --root is required");
    };
    let workspace = resolver::resolve_target(&database, target)?;

    let tmux = Tmux::new()?;
    let live = tmux.list_sessions()?;
    resolver::attach_or_start(&tmux, workspace, &live)?;
    Ok(())
}
