//! Shared fixtures for end-to-end CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes a fixture file into a temp directory and returns its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

/// Creates a temp directory for one test.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A two-key keyboard description: matrix (0,0) and (0,1) on a 1x2 matrix.
pub fn keyboard_json_two_keys() -> &'static str {
    r#"{
        "keyboard_name": "Test Keyboard",
        "usb": {"vid": "0xFEED", "pid": "0x0001", "device_version": "1.0.0"},
        "matrix_pins": {"rows": ["B0"], "cols": ["B1", "B2"]},
        "layouts": {
            "LAYOUT": {
                "layout": [
                    {"x": 0, "y": 0, "matrix": [0, 0]},
                    {"x": 1, "y": 0, "matrix": [0, 1]}
                ]
            }
        }
    }"#
}

/// A grid keymap dump with one layer over the two-key keyboard.
pub fn grid_dump_one_layer() -> &'static str {
    r#"{"layout": [[["KC_A", "KC_B"]]]}"#
}

/// A keycode table carrying the SAFE_RANGE marker.
pub fn keycodes_json_with_safe_range() -> &'static str {
    r#"{
        "0x0004": "KC_A",
        "0x0005": "KC_B",
        "0x7E40": "SAFE_RANGE"
    }"#
}

/// A keymap source with a custom-keycode enum and a notifier array.
pub fn keymap_c_sample() -> &'static str {
    r#"
#include QMK_KEYBOARD_H

enum custom_keycodes {
  KC_ALPHA = SAFE_RANGE, // α
  KC_BETA,               // β
  KC_GAMMA               // γ
};

const uint16_t PROGMEM keymaps[2][MATRIX_ROWS][MATRIX_COLS] = {
    [0] = LAYOUT(KC_A, KC_B),
    [1] = LAYOUT(_______, KC_ALPHA)
};

const int notifier_key_to_layer[2] = {
    KC_F13, // L0
    KC_F14, // L1
};
"#
}
