// ABOUTME: CLI list-rooted command - list workspace names under a root path
//
// A pure projection over the database: prints the names of every workspace
// whose root matches the given path, live or not. Never touches tmux.

use anyhow::{Context, Result};
use std::path::Path;

use super::RootedArgs;
use crate::models::Database;

/// Execute the list-rooted command
pub fn execute(database_path: &Path, args: &RootedArgs) -> Result<()> {
    let database = Database::load(database_path).with_context(|| {
        format!("failed to load workspace database {}", database_path.display())
    })?;

    for workspace in database.find_by_root(&args.path) {
        println!("{}", workspace.name);
    }
    Ok(())
}
