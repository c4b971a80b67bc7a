//! End-to-end tests for `keymapconv layer-names`.

use std::process::Command;

mod fixtures;
use fixtures::*;

/// Path to the keymapconv binary
fn keymapconv_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keymapconv")
}

#[test]
fn test_layer_names_from_notifier_array() {
    let temp = temp_dir();
    let keymap_c = write_file(temp.path(), "keymap.c", keymap_c_sample());

    let output = Command::new(keymapconv_bin())
        .args(["layer-names", "--keymap-c", keymap_c.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let mapping: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(mapping, serde_json::json!({"f13": "L0", "f14": "L1"}));
}

#[test]
fn test_layer_names_with_prefix() {
    let temp = temp_dir();
    let keymap_c = write_file(temp.path(), "keymap.c", keymap_c_sample());

    let output = Command::new(keymapconv_bin())
        .args([
            "layer-names",
            "--keymap-c",
            keymap_c.to_str().unwrap(),
            "--prefix",
            "kb_",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let mapping: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(mapping["f13"], "kb_L0");
}

#[test]
fn test_layer_names_missing_array_fails() {
    let temp = temp_dir();
    let keymap_c = write_file(temp.path(), "keymap.c", "int main(void) { return 0; }");

    let output = Command::new(keymapconv_bin())
        .args(["layer-names", "--keymap-c", keymap_c.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("notifier_key_to_layer"), "stderr: {stderr}");
}

#[test]
fn test_layer_names_non_f_key_trigger_fails() {
    let temp = temp_dir();
    let keymap_c = write_file(
        temp.path(),
        "keymap.c",
        "const int notifier_key_to_layer[1] = { KC_A };",
    );

    let output = Command::new(keymapconv_bin())
        .args(["layer-names", "--keymap-c", keymap_c.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("KC_A"), "stderr: {stderr}");
}
