// ABOUTME: CLI dump-database command - print the raw database document
//
// Renders what was actually loaded, not the derived workspace models, so
// fields twsm does not understand survive the round trip to stdout.

use anyhow::{Context, Result};
use std::path::Path;

use super::DumpArgs;
use crate::models::Database;

/// Execute the dump-database command
pub fn execute(database_path: &Path, args: &DumpArgs) -> Result<()> {
    let database = Database::load(database_path).with_context(|| {
        format!("failed to load workspace database {}", database_path.display())
    })?;

    println!("{}", database.dump(args.pretty)?);
    Ok(())
}
