// ABOUTME: Workspace and Database models backed by the YAML workspace database
//
// The database file is a YAML document with a `workspaces` sequence of
// `{name, root}` entries. It is loaded fresh per invocation, validated in
// one pass, and never written back; running status is always derived live
// from tmux, not stored here.

use crate::error::{Error, Result};
use crate::paths;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the database document.
#[derive(Debug, Deserialize)]
struct DatabaseDoc {
    workspaces: Vec<WorkspaceDoc>,
}

#[derive(Debug, Deserialize)]
struct WorkspaceDoc {
    name: String,
    root: String,
}

/// A named workspace: a tmux session identifier tied to a root directory.
///
/// Immutable once the database is loaded. The root is stored home-expanded
/// and normalized so lookups compare canonically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub name: String,
    pub root: PathBuf,
}

impl Workspace {
    fn from_doc(database: &Path, doc: WorkspaceDoc) -> Result<Self> {
        if doc.name.is_empty() {
            return Err(malformed(database, "workspace name is empty"));
        }
        if doc.name.chars().any(char::is_whitespace) {
            return Err(malformed(
                database,
                &format!("workspace name '{}' contains whitespace", doc.name),
            ));
        }
        // '.' and ':' are tmux's window/pane separators in target names
        if doc.name.contains(['.', ':']) {
            return Err(malformed(
                database,
                &format!("workspace name '{}' contains '.' or ':'", doc.name),
            ));
        }
        Ok(Self {
            name: doc.name,
            root: paths::normalize(Path::new(&doc.root)),
        })
    }
}

/// The loaded workspace database: an ordered, read-only list of workspaces
/// plus the raw document they came from.
#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
    raw: serde_json::Value,
    workspaces: Vec<Workspace>,
}

impl Database {
    /// Load and validate the database file.
    ///
    /// Any structural problem, including YAML-level failures, surfaces as
    /// `MalformedDatabase`; only the file read itself can return `Io`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(path, &text)
    }

    fn parse(path: &Path, text: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_yaml::from_str(text)
            .map_err(|e| malformed(path, &format!("invalid YAML: {e}")))?;
        let doc: DatabaseDoc =
            serde_yaml::from_str(text).map_err(|e| malformed(path, &e.to_string()))?;

        let workspaces = doc
            .workspaces
            .into_iter()
            .map(|entry| Workspace::from_doc(path, entry))
            .collect::<Result<Vec<_>>>()?;

        // Uniqueness is checked across the whole collection after
        // construction; the first duplicate in source order is reported.
        let mut seen = HashSet::new();
        for workspace in &workspaces {
            if !seen.insert(workspace.name.as_str()) {
                return Err(malformed(
                    path,
                    &format!("duplicate workspace name '{}'", workspace.name),
                ));
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            raw,
            workspaces,
        })
    }

    /// The file this database was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All workspaces, in source order.
    pub fn workspaces(&self) -> &[Workspace] {
        &self.workspaces
    }

    /// First workspace with the given name. Absence is not an error at
    /// this layer.
    pub fn find_by_name(&self, name: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.name == name)
    }

    /// All workspaces whose root equals `root` after normalization. May
    /// return zero, one, or many.
    pub fn find_by_root(&self, root: &Path) -> Vec<&Workspace> {
        let normalized = paths::normalize(root);
        self.workspaces.iter().filter(|w| w.root == normalized).collect()
    }

    /// Workspaces whose session name is in the live set, in database order.
    pub fn running<'a>(&'a self, live: &[String]) -> Vec<&'a Workspace> {
        self.workspaces
            .iter()
            .filter(|w| live.iter().any(|name| *name == w.name))
            .collect()
    }

    /// Render the originally loaded document, not the derived workspace
    /// objects. `pretty` controls indentation only.
    pub fn dump(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(&self.raw)
        } else {
            serde_json::to_string(&self.raw)
        };
        rendered.map_err(|e| malformed(&self.path, &e.to_string()))
    }
}

fn malformed(path: &Path, reason: &str) -> Error {
    Error::MalformedDatabase {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<Database> {
        Database::parse(Path::new("/tmp/workspaces.yml"), text)
    }

    #[test]
    fn parses_workspaces_in_source_order() {
        let db = parse(
            r"
workspaces:
  - name: beta
    root: /srv/beta
  - name: alpha
    root: /srv/alpha
",
        )
        .unwrap();

        let names: Vec<_> = db.workspaces().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["beta", "alpha"]);
    }

    #[test]
    fn missing_workspaces_field_is_malformed() {
        let err = parse("sessions: []\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDatabase { .. }), "{err}");
    }

    #[test]
    fn workspace_missing_root_is_malformed() {
        let err = parse("workspaces:\n- name: solo\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDatabase { .. }), "{err}");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = parse(
            r"
workspaces:
  - name: twin
    root: /srv/a
  - name: twin
    root: /srv/b
",
        )
        .unwrap_err();
        match err {
            Error::MalformedDatabase { reason, .. } => assert!(reason.contains("twin"), "{reason}"),
            other => panic!("expected MalformedDatabase, got {other}"),
        }
    }

    #[test]
    fn name_with_whitespace_is_rejected() {
        let err = parse("workspaces:\n- name: \"two words\"\n  root: /srv/x\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDatabase { .. }), "{err}");
    }

    #[test]
    fn name_with_tmux_separator_is_rejected() {
        let err = parse("workspaces:\n- name: \"a:b\"\n  root: /srv/x\n").unwrap_err();
        assert!(matches!(err, Error::MalformedDatabase { .. }), "{err}");
    }

    #[test]
    fn roots_are_normalized_at_load() {
        let db = parse("workspaces:\n- name: app\n  root: /srv/./deep/../app\n").unwrap();
        assert_eq!(db.workspaces()[0].root, PathBuf::from("/srv/app"));
    }

    #[test]
    fn find_by_root_normalizes_its_argument() {
        let db = parse("workspaces:\n- name: app\n  root: /srv/app\n").unwrap();
        let hits = db.find_by_root(Path::new("/srv/other/../app/."));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "app");
    }

    #[test]
    fn running_is_the_live_intersection_in_db_order() {
        let db = parse(
            r"
workspaces:
  - name: one
    root: /srv/1
  - name: two
    root: /srv/2
  - name: three
    root: /srv/3
",
        )
        .unwrap();

        assert!(db.running(&[]).is_empty());

        let live = vec!["three".to_string(), "one".to_string(), "stray".to_string()];
        let names: Vec<_> = db.running(&live).iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["one", "three"]);
    }

    #[test]
    fn dump_preserves_unmodeled_fields() {
        let db = parse("workspaces:\n- name: app\n  root: /srv/app\n  extra: 7\n").unwrap();
        let compact = db.dump(false).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"extra\":7"));

        let pretty = db.dump(true).unwrap();
        assert!(pretty.contains('\n'));
        assert!(pretty.contains("\"extra\": 7"));
    }
}
