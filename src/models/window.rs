// ABOUTME: Window and Configuration models for per-workspace tmux window setup
//
// A configuration file lives at a fixed basename inside the workspace root
// and is only loaded on the start path, never when listing. Each window
// entry is a single-key mapping from window name to its startup commands.

use crate::error::{Error, Result};
use crate::tmux::Directive;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// One named tmux window plus the commands typed into it on startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub name: String,
    pub commands: Vec<String>,
}

impl Window {
    /// Build a window from one entry of the `windows` sequence.
    ///
    /// The commands may be absent, a single string, or a list of strings;
    /// all three normalize to an ordered command list.
    pub fn from_entry(config: &Path, entry: &Value) -> Result<Self> {
        let mapping = entry
            .as_mapping()
            .ok_or_else(|| malformed(config, "window entry is not a mapping"))?;
        if mapping.len() != 1 {
            return Err(malformed(
                config,
                &format!("window entry must have exactly one key, found {}", mapping.len()),
            ));
        }
        let (key, value) = mapping
            .iter()
            .next()
            .ok_or_else(|| malformed(config, "window entry must have exactly one key"))?;
        let name = key
            .as_str()
            .ok_or_else(|| malformed(config, "window name is not a string"))?
            .to_string();

        let commands = match value {
            Value::Null => Vec::new(),
            Value::String(command) => vec![command.clone()],
            Value::Sequence(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_owned).ok_or_else(|| {
                        malformed(config, &format!("command for window '{name}' is not a string"))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
            _ => {
                return Err(malformed(
                    config,
                    &format!("commands for window '{name}' must be a string or list of strings"),
                ))
            }
        };

        Ok(Self { name, commands })
    }
}

/// The per-workspace window configuration: an ordered window list whose
/// order assigns tmux window indexes.
#[derive(Debug, Clone)]
pub struct Configuration {
    path: PathBuf,
    windows: Vec<Window>,
}

impl Configuration {
    pub fn new(path: impl Into<PathBuf>, windows: Vec<Window>) -> Self {
        Self { path: path.into(), windows }
    }

    /// Load the configuration file, requiring a `windows` sequence.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let doc: Value = serde_yaml::from_str(&text)
            .map_err(|e| malformed(path, &format!("invalid YAML: {e}")))?;
        let entries = doc
            .get("windows")
            .ok_or_else(|| malformed(path, "missing 'windows' field"))?
            .as_sequence()
            .ok_or_else(|| malformed(path, "'windows' is not a sequence"))?;
        let windows = entries
            .iter()
            .map(|entry| Window::from_entry(path, entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { path: path.to_path_buf(), windows })
    }

    /// The file this configuration was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Compile the window list into the ordered tmux directive script.
    ///
    /// Window 1 is pre-selected when more than one window exists, so a
    /// last-window toggle lands there; the final directive always leaves
    /// window 0 focused.
    pub fn compile(&self) -> Vec<Directive> {
        let mut script = Vec::new();
        for (index, window) in self.windows.iter().enumerate() {
            script.push(Directive::CreateWindow { index, name: window.name.clone() });
            for command in &window.commands {
                script.push(Directive::SendKeys { index, keys: command.clone() });
            }
        }
        if self.windows.len() > 1 {
            script.push(Directive::SelectWindow { index: 1 });
        }
        script.push(Directive::SelectWindow { index: 0 });
        script
    }
}

fn malformed(path: &Path, reason: &str) -> Error {
    Error::MalformedConfig {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
