// ABOUTME: Path expansion and normalization shared by the models and CLI

use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` component to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home;
    }
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Normalize a path the way workspace roots are stored: expand `~`, resolve
/// against the current directory if relative, and strip `.`/`..` components
/// lexically.
///
/// Purely lexical: roots must compare equal whether or not the directory
/// exists yet.
pub fn normalize(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir().map(|cwd| cwd.join(&expanded)).unwrap_or(expanded)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dot_components() {
        assert_eq!(normalize(Path::new("/a/./b/./c")), PathBuf::from("/a/b/c"));
    }

    #[test]
    fn resolves_parent_components() {
        assert_eq!(normalize(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("/a/b/c/../..")), PathBuf::from("/a"));
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize(Path::new(".")), normalize(&cwd));
        assert_eq!(normalize(Path::new("sub")), normalize(&cwd.join("sub")));
    }

    #[test]
    fn expands_tilde_prefix() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(normalize(Path::new("~")), normalize(&home));
        assert_eq!(normalize(Path::new("~/projects")), normalize(&home.join("projects")));
    }

    #[test]
    fn tilde_username_is_not_expanded() {
        assert_eq!(expand_home(Path::new("~other/x")), PathBuf::from("~other/x"));
    }
}
