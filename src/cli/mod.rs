// ABOUTME: CLI argument parsing and command routing for twsm
//
// Provides command-line interface for:
// - Attaching to or starting workspace sessions (attach-workspace)
// - Listing known and running workspaces (list-workspaces)
// - Listing workspaces under a root path (list-rooted)
// - Dumping the raw workspace database (dump-database)

pub mod attach;
pub mod dump;
pub mod list;
pub mod rooted;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tmux workspace session manager
#[derive(Parser)]
#[command(name = "twsm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace database file to use instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Attach to a workspace session, starting it first if necessary
    #[command(visible_aliases = ["attach", "a"])]
    AttachWorkspace(AttachArgs),

    /// List workspaces (running ones by default)
    #[command(visible_alias = "ls")]
    ListWorkspaces(ListArgs),

    /// List workspaces rooted at a path
    #[command(visible_alias = "root")]
    ListRooted(RootedArgs),

    /// Dump the raw workspace database
    #[command(visible_alias = "db")]
    DumpDatabase(DumpArgs),
}

/// Arguments for the attach-workspace command
#[derive(clap::Args)]
pub struct AttachArgs {
    /// Workspace name
    #[arg(required_unless_present = "root", conflicts_with = "root")]
    pub workspace: Option<String>,

    /// Select the workspace by its root directory instead of by name
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

/// Arguments for the list-workspaces command
#[derive(clap::Args)]
pub struct ListArgs {
    /// List every known workspace, not just running ones
    #[arg(long, short)]
    pub all: bool,

    /// Show workspace roots as well as names
    #[arg(long, short)]
    pub verbose: bool,
}

/// Arguments for the list-rooted command
#[derive(clap::Args)]
pub struct RootedArgs {
    /// Root directory to match workspaces against
    pub path: PathBuf,
}

/// Arguments for the dump-database command
#[derive(clap::Args)]
pub struct DumpArgs {
    /// Indent the output
    #[arg(long, short)]
    pub pretty: bool,
}
