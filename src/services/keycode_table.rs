//! Canonical keycode table construction.
//!
//! A firmware keycode specification maps hex-code strings to a primary name
//! and a list of aliases; several entries may resolve to the same numeric
//! code. This module picks one canonical name per code by a fixed
//! precedence and can locate the newest specification file under a
//! firmware tree.

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{format_code, parse_hex_code, FlatLayer, KeyToken};

/// Well-known short mnemonic names preferred over any other alias.
pub const PREFERRED_NAMES: &[&str] = &[
    "KC_TRNS", "KC_ESC", "KC_ENT", "KC_BSPC", "KC_LCTL", "KC_RCTL", "KC_LSFT", "KC_RSFT",
    "KC_LALT", "KC_RALT", "KC_LGUI", "KC_RGUI", "KC_SCLN", "KC_QUOT", "KC_COMM", "KC_MINS",
    "KC_EQL", "KC_BSLS", "KC_GRV", "KC_SLSH", "KC_LBRC", "KC_RBRC", "KC_SPC", "KC_APP",
    "KC_PSCR", "KC_SCRL", "KC_NUHS", "KC_NUBS", "KC_LCBR", "KC_RCBR", "KC_LPRN", "KC_RPRN",
    "KC_TILD", "KC_EXLM", "KC_AT", "KC_HASH", "KC_DLR", "KC_PERC", "KC_CIRC", "KC_AMPR",
    "KC_ASTR", "KC_UNDS", "KC_PLUS", "KC_PIPE", "KC_COLN", "KC_DQUO", "KC_LABK", "KC_RABK",
    "KC_QUES",
];

/// One keycode specification entry: primary name plus aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeycodeSpecEntry {
    /// Primary name
    #[serde(default)]
    pub key: Option<String>,
    /// Alternative names
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
}

/// Firmware keycode specification document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeycodeSpec {
    /// Hex-code string → names
    #[serde(default)]
    pub keycodes: BTreeMap<String, KeycodeSpecEntry>,
}

fn is_preferred(name: &str) -> bool {
    PREFERRED_NAMES.contains(&name)
}

fn is_sentinel(name: &str) -> bool {
    name == "KC_TRNS" || name == "KC_NO"
}

/// Whether `candidate` should replace `current` as the canonical name.
fn replaces(current: &str, candidate: &str) -> bool {
    if is_preferred(current) {
        return false;
    }
    if is_preferred(candidate) {
        return true;
    }
    if is_sentinel(candidate) {
        return true;
    }
    if is_sentinel(current) {
        return false;
    }
    candidate.len() < current.len()
}

/// Derives one canonical name per numeric code from a specification.
///
/// Candidates for a code are its entry's primary name followed by the
/// aliases; entries whose hex key does not parse are skipped. The
/// precedence is cumulative across entries that resolve to the same code.
pub fn build_code_table(spec: &KeycodeSpec) -> BTreeMap<u16, String> {
    let mut table: BTreeMap<u16, String> = BTreeMap::new();

    for (hex_code, entry) in &spec.keycodes {
        let Some(code) = parse_hex_code(hex_code) else {
            continue;
        };

        let candidates = entry
            .key
            .iter()
            .chain(entry.aliases.iter().flatten())
            .filter(|name| !name.is_empty());

        for name in candidates {
            match table.get(&code) {
                None => {
                    table.insert(code, name.clone());
                }
                Some(current) => {
                    if replaces(current, name) {
                        table.insert(code, name.clone());
                    }
                }
            }
        }
    }

    table
}

/// Rewrites every numeric token in a layer stack as a symbolic name: the
/// table's name when the code is known, the canonical hex spelling
/// otherwise. String tokens pass through untouched.
pub fn apply_code_names(layers: Vec<FlatLayer>, table: &BTreeMap<u16, String>) -> Vec<FlatLayer> {
    layers
        .into_iter()
        .map(|layer| {
            layer
                .into_iter()
                .map(|token| match token {
                    KeyToken::Code(code) => {
                        let name = table
                            .get(&code)
                            .cloned()
                            .unwrap_or_else(|| format_code(code));
                        KeyToken::Name(name)
                    }
                    name @ KeyToken::Name(_) => name,
                })
                .collect()
        })
        .collect()
}

/// Locates the newest `keycodes_<M.m.p>.json` specification under a
/// firmware tree (`data/constants/keycodes/`).
pub fn find_latest_spec(qmk_dir: &Path) -> Result<PathBuf> {
    let spec_dir = qmk_dir.join("data").join("constants").join("keycodes");
    if !spec_dir.exists() {
        bail!(
            "Keycode specification directory not found at {}",
            spec_dir.display()
        );
    }

    let version_pattern =
        Regex::new(r"^keycodes_(\d+)\.(\d+)\.(\d+)\.json$").context("Invalid version pattern")?;

    let mut best: Option<((u32, u32, u32), PathBuf)> = None;
    let entries = fs::read_dir(&spec_dir)
        .with_context(|| format!("Failed to read {}", spec_dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(captures) = version_pattern.captures(name) else {
            continue;
        };
        let version = (
            captures[1].parse().unwrap_or(0),
            captures[2].parse().unwrap_or(0),
            captures[3].parse().unwrap_or(0),
        );
        if best.as_ref().map_or(true, |(current, _)| version > *current) {
            best = Some((version, entry.path()));
        }
    }

    let (_, path) = best.with_context(|| {
        format!(
            "No keycode specification versions found in {}",
            spec_dir.display()
        )
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn spec_from_json(json: &str) -> KeycodeSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_primary_name_used_when_alone() {
        let spec = spec_from_json(r#"{"keycodes": {"0x0004": {"key": "KC_A"}}}"#);
        let table = build_code_table(&spec);
        assert_eq!(table.get(&4).map(String::as_str), Some("KC_A"));
    }

    #[test]
    fn test_shorter_name_wins_across_duplicate_entries() {
        // Two spellings of code 4: the shorter name survives the merge.
        let spec = spec_from_json(
            r#"{"keycodes": {
                "0x0004": {"key": "KC_A"},
                "0x04": {"key": "KC_Z", "aliases": ["KC_A"]}
            }}"#,
        );
        let table = build_code_table(&spec);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&4).map(String::as_str), Some("KC_A"));
    }

    #[test]
    fn test_preferred_name_beats_shorter_alias() {
        let spec = spec_from_json(
            r#"{"keycodes": {"0x002C": {"key": "KC_SP", "aliases": ["KC_SPC"]}}}"#,
        );
        let table = build_code_table(&spec);
        assert_eq!(table.get(&0x2C).map(String::as_str), Some("KC_SPC"));
    }

    #[test]
    fn test_preferred_name_is_never_replaced() {
        let spec = spec_from_json(
            r#"{"keycodes": {"0x0029": {"key": "KC_ESC", "aliases": ["KC_E"]}}}"#,
        );
        let table = build_code_table(&spec);
        assert_eq!(table.get(&0x29).map(String::as_str), Some("KC_ESC"));
    }

    #[test]
    fn test_sentinel_beats_ordinary_name() {
        let spec = spec_from_json(
            r#"{"keycodes": {"0x0000": {"key": "KC_NOOP", "aliases": ["KC_NO", "XXXXXXX"]}}}"#,
        );
        let table = build_code_table(&spec);
        assert_eq!(table.get(&0).map(String::as_str), Some("KC_NO"));
    }

    #[test]
    fn test_unparsable_hex_keys_are_skipped() {
        let spec = spec_from_json(
            r#"{"keycodes": {"bogus": {"key": "KC_X"}, "0x0004": {"key": "KC_A"}}}"#,
        );
        let table = build_code_table(&spec);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_apply_code_names_resolves_numeric_tokens() {
        let mut table = BTreeMap::new();
        table.insert(4u16, "KC_A".to_string());
        let layers = vec![vec![
            KeyToken::Code(4),
            KeyToken::Code(0x7E40),
            KeyToken::Name("KC_B".to_string()),
        ]];
        let resolved = apply_code_names(layers, &table);
        assert_eq!(
            resolved[0],
            vec![
                KeyToken::Name("KC_A".to_string()),
                KeyToken::Name("0x7E40".to_string()),
                KeyToken::Name("KC_B".to_string()),
            ]
        );
    }

    #[test]
    fn test_find_latest_spec_picks_highest_version() {
        let temp_dir = TempDir::new().unwrap();
        let spec_dir = temp_dir.path().join("data/constants/keycodes");
        fs::create_dir_all(&spec_dir).unwrap();
        fs::write(spec_dir.join("keycodes_0.0.1.json"), "{}").unwrap();
        fs::write(spec_dir.join("keycodes_0.0.3.json"), "{}").unwrap();
        fs::write(spec_dir.join("keycodes_0.0.2.json"), "{}").unwrap();
        fs::write(spec_dir.join("keycodes_0.0.3_basic.json"), "{}").unwrap();

        let path = find_latest_spec(temp_dir.path()).unwrap();
        assert!(path.ends_with("keycodes_0.0.3.json"));
    }

    #[test]
    fn test_find_latest_spec_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(find_latest_spec(temp_dir.path()).is_err());
    }

    #[test]
    fn test_find_latest_spec_no_versions() {
        let temp_dir = TempDir::new().unwrap();
        let spec_dir = temp_dir.path().join("data/constants/keycodes");
        fs::create_dir_all(&spec_dir).unwrap();
        fs::write(spec_dir.join("readme.md"), "").unwrap();
        assert!(find_latest_spec(temp_dir.path()).is_err());
    }
}
