// ABOUTME: Integration tests for window configuration loading and compilation

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use twsm::error::Error;
use twsm::models::Configuration;
use twsm::tmux::Directive;

fn write_config(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join(".twsm.yml");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn load_normalizes_all_three_command_shapes() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r"
windows:
  - build: [make, make test]
  - watch:
  - shell: htop
",
    );

    let config = Configuration::load(&path).unwrap();
    let windows = config.windows();
    assert_eq!(windows.len(), 3);

    assert_eq!(windows[0].name, "build");
    assert_eq!(windows[0].commands, vec!["make".to_string(), "make test".to_string()]);

    assert_eq!(windows[1].name, "watch");
    assert!(windows[1].commands.is_empty());

    assert_eq!(windows[2].name, "shell");
    assert_eq!(windows[2].commands, vec!["htop".to_string()]);
}

#[test]
fn load_requires_a_windows_sequence() {
    let dir = TempDir::new().unwrap();

    let path = write_config(&dir, "panes: []\n");
    assert!(matches!(
        Configuration::load(&path),
        Err(Error::MalformedConfig { .. })
    ));

    let path = write_config(&dir, "windows: not-a-list\n");
    assert!(matches!(
        Configuration::load(&path),
        Err(Error::MalformedConfig { .. })
    ));
}

#[test]
fn load_rejects_non_string_commands() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "windows:\n- build: [make, 42]\n");

    match Configuration::load(&path) {
        Err(Error::MalformedConfig { reason, .. }) => {
            assert!(reason.contains("build"), "{reason}");
        }
        other => panic!("expected MalformedConfig, got {other:?}"),
    }
}

#[test]
fn compiled_script_orders_windows_commands_and_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r"
windows:
  - a: ls
  - b:
",
    );

    let config = Configuration::load(&path).unwrap();
    assert_eq!(
        config.compile(),
        vec![
            Directive::CreateWindow { index: 0, name: "a".to_string() },
            Directive::SendKeys { index: 0, keys: "ls".to_string() },
            Directive::CreateWindow { index: 1, name: "b".to_string() },
            Directive::SelectWindow { index: 1 },
            Directive::SelectWindow { index: 0 },
        ]
    );
}

#[test]
fn empty_window_list_still_selects_window_zero() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "windows: []\n");

    let config = Configuration::load(&path).unwrap();
    assert_eq!(config.compile(), vec![Directive::SelectWindow { index: 0 }]);
}
