//! Text-pattern extraction from firmware C source.
//!
//! Keymap sources are scanned with regular expressions, never compiled: we
//! only need the `enum custom_keycodes { ... };` block and the
//! `notifier_key_to_layer[] = { ... };` array.

use anyhow::{Context, Result};
use regex::Regex;

/// Removes C-style `//` and `/* */` comments.
pub fn strip_c_comments(text: &str) -> Result<String> {
    let block = Regex::new(r"(?s)/\*.*?\*/").context("Invalid block-comment pattern")?;
    let line = Regex::new(r"//[^\n]*").context("Invalid line-comment pattern")?;
    let without_blocks = block.replace_all(text, "");
    Ok(line.replace_all(&without_blocks, "").into_owned())
}

/// Locates the body of the `enum custom_keycodes { ... };` block.
pub fn extract_custom_keycodes_block(content: &str) -> Result<String> {
    let pattern = Regex::new(r"(?s)enum\s+custom_keycodes\s*\{([^}]+)\};")
        .context("Invalid enum pattern")?;
    let captures = pattern
        .captures(content)
        .context("enum custom_keycodes not found in keymap source")?;
    Ok(captures[1].to_string())
}

/// Locates the entries of the `notifier_key_to_layer[...] = { ... };` array.
pub fn extract_notifier_entries(content: &str) -> Result<Vec<String>> {
    let pattern = Regex::new(r"(?s)notifier_key_to_layer\s*\[[^\]]+\]\s*=\s*\{(.*?)\};")
        .context("Invalid notifier pattern")?;
    let captures = pattern
        .captures(content)
        .context("notifier_key_to_layer array not found in keymap source")?;

    let entries = split_entries(&captures[1])?;
    if entries.is_empty() {
        anyhow::bail!("notifier_key_to_layer array is empty");
    }
    Ok(entries)
}

/// Strips comments from a brace-delimited block body and splits it into
/// trimmed, non-empty comma-separated entries.
pub fn split_entries(block: &str) -> Result<Vec<String>> {
    let cleaned = strip_c_comments(block)?;
    Ok(cleaned
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_c_comments() {
        let text = "FOO, // alpha\nBAR, /* beta\ngamma */ BAZ";
        let stripped = strip_c_comments(text).unwrap();
        assert!(!stripped.contains("alpha"));
        assert!(!stripped.contains("beta"));
        assert!(stripped.contains("FOO"));
        assert!(stripped.contains("BAZ"));
    }

    #[test]
    fn test_extract_custom_keycodes_block() {
        let source = r"
#include QMK_KEYBOARD_H

enum custom_keycodes {
  KC_ALPHA = SAFE_RANGE, // α
  KC_BETA
};
";
        let block = extract_custom_keycodes_block(source).unwrap();
        assert!(block.contains("KC_ALPHA"));
        assert!(block.contains("KC_BETA"));
    }

    #[test]
    fn test_extract_custom_keycodes_block_missing() {
        let err = extract_custom_keycodes_block("int main(void) {}").unwrap_err();
        assert!(err.to_string().contains("enum custom_keycodes"));
    }

    #[test]
    fn test_extract_notifier_entries() {
        let source = r"
const int notifier_key_to_layer[DYNAMIC_KEYMAP_LAYER_COUNT] = {
    KC_F13, // L0
    KC_F14, // L1
};
";
        let entries = extract_notifier_entries(source).unwrap();
        assert_eq!(entries, vec!["KC_F13", "KC_F14"]);
    }

    #[test]
    fn test_extract_notifier_entries_empty_array() {
        let source = "const int notifier_key_to_layer[1] = { /* none */ };";
        let err = extract_notifier_entries(source).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_split_entries_drops_blanks() {
        let entries = split_entries("A, , B,\n\n C,").unwrap();
        assert_eq!(entries, vec!["A", "B", "C"]);
    }
}
