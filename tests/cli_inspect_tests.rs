//! End-to-end tests for `keymapconv inspect`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the keymapconv binary
fn keymapconv_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymapconv")
}

#[test]
fn test_inspect_prints_layer_count() {
    let temp = temp_dir();
    let keymap = write_file(
        temp.path(),
        "keymap.json",
        r#"{"version": 1, "layout": "LAYOUT", "layers": [["KC_A"], ["KC_B"]]}"#,
    );

    let output = Command::new(keymapconv_bin())
        .args(["inspect", keymap.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2");
}

#[test]
fn test_inspect_without_layers_counts_zero() {
    let temp = temp_dir();
    let keymap = write_file(temp.path(), "keymap.json", r#"{"version": 1}"#);

    let output = Command::new(keymapconv_bin())
        .args(["inspect", keymap.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0");
}

#[test]
fn test_inspect_json_output() {
    let temp = temp_dir();
    let keymap = write_file(
        temp.path(),
        "keymap.json",
        r#"{"version": 1, "layout": "LAYOUT", "layers": [["KC_A"]]}"#,
    );

    let output = Command::new(keymapconv_bin())
        .args(["inspect", keymap.to_str().unwrap(), "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["version"], 1);
    assert_eq!(summary["layout"], "LAYOUT");
    assert_eq!(summary["layer_count"], 1);
}

#[test]
fn test_inspect_missing_keymap_fails() {
    let temp = temp_dir();

    let output = Command::new(keymapconv_bin())
        .args(["inspect", temp.path().join("absent.json").to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
