// ABOUTME: Tmux driver - session queries and lifecycle behind the Multiplexer trait
//
// Every interaction with tmux is one blocking subprocess invocation built
// from an argument vector. The resolver talks to the `Multiplexer` trait so
// tests can substitute a recording fake.

pub mod directive;

pub use directive::Directive;

use crate::error::{Error, Result};
use std::io;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Everything the resolver needs from the external multiplexer.
pub trait Multiplexer {
    /// Names of all currently running sessions.
    fn list_sessions(&self) -> Result<Vec<String>>;

    /// Create a detached session named `name` with working directory `root`.
    fn new_session(&self, name: &str, root: &Path) -> Result<()>;

    /// Apply a compiled directive script to `session`, running each
    /// directive from within `root` so relative paths resolve there.
    fn apply(&self, session: &str, root: &Path, script: &[Directive]) -> Result<()>;

    /// Source a raw tmux command file via tmux's own `source-file`,
    /// running from within `root`.
    fn source_file(&self, root: &Path, file: &Path) -> Result<()>;

    /// Attach the invoking terminal to `session`. Blocks for the whole
    /// interactive attach; this process never proxies its I/O.
    fn attach(&self, session: &str) -> Result<()>;
}

/// The real tmux client, driving the `tmux` binary.
pub struct Tmux;

impl Tmux {
    /// Fail up front when the tmux binary is not on PATH, instead of at
    /// the first directive.
    pub fn new() -> Result<Self> {
        which::which("tmux").map_err(|_| Error::ExternalTool {
            directive: "locate tmux".to_string(),
            detail: "tmux binary not found on PATH".to_string(),
        })?;
        Ok(Self)
    }

    fn run(args: &[String], cwd: Option<&Path>) -> Result<()> {
        debug!("tmux {}", args.join(" "));
        let mut command = Command::new("tmux");
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        let output = command.output()?;
        if !output.status.success() {
            return Err(Error::ExternalTool {
                directive: args.join(" "),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

impl Multiplexer for Tmux {
    fn list_sessions(&self) -> Result<Vec<String>> {
        let output = Command::new("tmux")
            .args(["list-sessions", "-F", "#{session_name}"])
            .output()?;
        if !output.status.success() {
            // No server running: nothing is live.
            debug!(
                "tmux list-sessions: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Ok(Vec::new());
        }
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_owned)
            .collect())
    }

    fn new_session(&self, name: &str, root: &Path) -> Result<()> {
        info!("creating session '{}' rooted at {}", name, root.display());
        Self::run(
            &[
                "new-session".to_string(),
                "-d".to_string(),
                "-s".to_string(),
                name.to_string(),
                "-c".to_string(),
                path_arg(root)?,
            ],
            None,
        )
    }

    fn apply(&self, session: &str, root: &Path, script: &[Directive]) -> Result<()> {
        for directive in script {
            Self::run(&directive.to_args(session), Some(root))?;
        }
        Ok(())
    }

    fn source_file(&self, root: &Path, file: &Path) -> Result<()> {
        Self::run(
            &["source-file".to_string(), path_arg(file)?],
            Some(root),
        )
    }

    fn attach(&self, session: &str) -> Result<()> {
        info!("attaching to session '{}'", session);
        // exec replaces this process with the tmux client; control only
        // comes back when the exec itself failed
        let err = Command::new("tmux")
            .args(["attach-session", "-t", session])
            .exec();
        Err(Error::ExternalTool {
            directive: format!("attach-session -t {session}"),
            detail: err.to_string(),
        })
    }
}

fn path_arg(path: &Path) -> Result<String> {
    path.to_str().map(str::to_owned).ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path is not valid UTF-8: {}", path.display()),
        ))
    })
}
