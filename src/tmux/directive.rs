// ABOUTME: Structured tmux directives compiled from a window configuration
//
// Each directive is a verb plus arguments, rendered to the argv vector for
// one tmux invocation. Session names and paths are never interpolated into
// a shell string.

/// One tmux operation against a session being configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Create the window at `index`, replacing whatever occupies it.
    CreateWindow { index: usize, name: String },
    /// Type `keys` into the window at `index` and press Enter.
    SendKeys { index: usize, keys: String },
    /// Focus the window at `index`.
    SelectWindow { index: usize },
}

impl Directive {
    /// Render the argument vector for one `tmux` invocation targeting
    /// `session`.
    pub fn to_args(&self, session: &str) -> Vec<String> {
        match self {
            Self::CreateWindow { index, name } => vec![
                "new-window".to_string(),
                "-d".to_string(),
                "-k".to_string(),
                "-t".to_string(),
                format!("{session}:{index}"),
                "-n".to_string(),
                name.clone(),
            ],
            Self::SendKeys { index, keys } => vec![
                "send-keys".to_string(),
                "-t".to_string(),
                format!("{session}:{index}"),
                keys.clone(),
                "C-m".to_string(),
            ],
            Self::SelectWindow { index } => vec![
                "select-window".to_string(),
                "-t".to_string(),
                format!("{session}:{index}"),
            ],
        }
    }
}
