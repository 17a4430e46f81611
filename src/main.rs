// ABOUTME: Main entry point for twsm
//
// Binary: twsm
// Usage: twsm <COMMAND>
// - attach-workspace (attach, a): attach to or start a workspace session
// - list-workspaces (ls): list running or all known workspaces
// - list-rooted (root): list workspaces under a root path
// - dump-database (db): print the raw database document

use anyhow::Result;
use clap::Parser;

use twsm::cli::{self, Cli, Commands};
use twsm::{config, paths};

fn main() -> Result<()> {
    setup_logging();

    let args = Cli::parse();
    let database = match args.database {
        Some(ref path) => paths::normalize(path),
        None => config::default_database_path()?,
    };

    match args.command {
        Commands::AttachWorkspace(ref attach_args) => cli::attach::execute(&database, attach_args),
        Commands::ListWorkspaces(ref list_args) => cli::list::execute(&database, list_args),
        Commands::ListRooted(ref rooted_args) => cli::rooted::execute(&database, rooted_args),
        Commands::DumpDatabase(ref dump_args) => cli::dump::execute(&database, dump_args),
    }
}

/// Logs go to stderr so stdout stays clean for list/dump output.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "twsm=warn".into()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
