//! Trigger-key to layer-name mapping.
//!
//! The firmware's `notifier_key_to_layer` array lists one trigger key per
//! layer, in layer order. Each trigger must be an F-key; it normalizes to
//! the lowercase `f<n>` spelling and maps to a synthetic `L<index>` name.

use anyhow::{Context, Result};
use regex::Regex;

use crate::models::LayerNameMapping;

/// Builds the ordered trigger-key → layer-name mapping.
pub fn build_layer_mapping(entries: &[String], prefix: &str) -> Result<LayerNameMapping> {
    let mut pairs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let trigger = normalize_trigger(entry)?;
        pairs.push((trigger, format!("{prefix}L{index}")));
    }
    Ok(LayerNameMapping(pairs))
}

/// Normalizes an F-key trigger (`KC_F13` or `F13`) to `f13`.
fn normalize_trigger(entry: &str) -> Result<String> {
    let pattern = Regex::new(r"^(?:KC_)?F(\d+)$").context("Invalid trigger pattern")?;
    let captures = pattern
        .captures(entry)
        .with_context(|| format!("Unsupported notifier keycode: {entry}"))?;
    let number: u32 = captures[1]
        .parse()
        .with_context(|| format!("Unsupported notifier keycode: {entry}"))?;
    Ok(format!("f{number}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn test_maps_triggers_in_layer_order() {
        let mapping = build_layer_mapping(&entries(&["KC_F13", "KC_F14", "KC_F15"]), "").unwrap();
        assert_eq!(
            mapping.0,
            vec![
                ("f13".to_string(), "L0".to_string()),
                ("f14".to_string(), "L1".to_string()),
                ("f15".to_string(), "L2".to_string()),
            ]
        );
    }

    #[test]
    fn test_prefix_is_applied() {
        let mapping = build_layer_mapping(&entries(&["KC_F13"]), "kb_").unwrap();
        assert_eq!(mapping.0[0].1, "kb_L0");
    }

    #[test]
    fn test_bare_f_key_and_leading_zeros() {
        let mapping = build_layer_mapping(&entries(&["F13", "KC_F07"]), "").unwrap();
        assert_eq!(mapping.0[0].0, "f13");
        assert_eq!(mapping.0[1].0, "f7");
    }

    #[test]
    fn test_non_f_key_is_rejected() {
        let err = build_layer_mapping(&entries(&["KC_A"]), "").unwrap_err();
        assert!(err.to_string().contains("KC_A"));
    }
}
