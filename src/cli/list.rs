// ABOUTME: CLI list-workspaces command - list known or running workspaces
//
// Default output is the workspaces with a live tmux session, queried from
// tmux exactly once. --all lists every database entry without touching
// tmux at all; --verbose adds the root column.

use anyhow::{Context, Result};
use std::path::Path;

use super::ListArgs;
use crate::models::{Database, Workspace};
use crate::tmux::{Multiplexer, Tmux};

/// Execute the list-workspaces command
pub fn execute(database_path: &Path, args: &ListArgs) -> Result<()> {
    let database = Database::load(database_path).with_context(|| {
        format!("failed to load workspace database {}", database_path.display())
    })?;

    let workspaces: Vec<&Workspace> = if args.all {
        database.workspaces().iter().collect()
    } else {
        let live = Tmux::new()?.list_sessions()?;
        database.running(&live)
    };

    output_text(&workspaces, args.verbose);
    Ok(())
}

/// Print one workspace per line, name-only unless verbose.
fn output_text(workspaces: &[&Workspace], verbose: bool) {
    if workspaces.is_empty() {
        println!("No workspaces.");
        return;
    }

    let width = workspaces.iter().map(|w| w.name.len()).max().unwrap_or(0);
    for workspace in workspaces {
        if verbose {
            println!("{:<width$}  {}", workspace.name, workspace.root.display());
        } else {
            println!("{}", workspace.name);
        }
    }
}
