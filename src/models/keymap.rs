//! Flat keymap and grid keymap documents.
//!
//! A flat keymap addresses keys by the linear flat index defined by a
//! physical layout; a grid keymap addresses them by `(row, column)` matrix
//! coordinate. Both carry the same key-code tokens: either a symbolic name
//! or a raw numeric code.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::codes::{format_code, parse_hex_code};

/// One keymap entry: a raw numeric code or a symbolic name.
///
/// The numeric variant is tried first when deserializing, so JSON numbers
/// always become codes and JSON strings always become names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyToken {
    /// Raw 16-bit key code
    Code(u16),
    /// Symbolic key-code name (e.g. "KC_A", "MO(1)", "0x7E40")
    Name(String),
}

impl KeyToken {
    /// Token used for positions with no assigned key.
    pub fn no_op() -> Self {
        KeyToken::Name("KC_NO".to_string())
    }

    /// Returns the numeric code this token denotes, if any: raw numbers,
    /// `0x`-prefixed hex strings, and plain decimal strings all qualify.
    pub fn code_value(&self) -> Option<u16> {
        match self {
            KeyToken::Code(code) => Some(*code),
            KeyToken::Name(name) => {
                if let Some(code) = parse_hex_code(name) {
                    return Some(code);
                }
                if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
                    return name.parse().ok();
                }
                None
            }
        }
    }

    /// Renders the token as a symbolic name, falling back to the canonical
    /// hex spelling for numeric codes.
    pub fn into_name(self) -> KeyToken {
        match self {
            KeyToken::Code(code) => KeyToken::Name(format_code(code)),
            name @ KeyToken::Name(_) => name,
        }
    }

    /// Returns the symbolic name, if this token is one.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            KeyToken::Name(name) => Some(name),
            KeyToken::Code(_) => None,
        }
    }
}

/// A single layer of a flat keymap: one token per flat index.
pub type FlatLayer = Vec<KeyToken>;

/// A single layer of a grid keymap, indexed `[row][col]`.
pub type GridLayer = Vec<Vec<KeyToken>>;

/// Flat firmware keymap document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeymapJson {
    /// Document version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Name of the layout the flat indices refer to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Ordered layers, each one token per flat index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<FlatLayer>>,
    /// Fields we do not interpret but must not drop on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KeymapJson {
    /// Creates a version-1 keymap for the given layout name and layers.
    pub fn new(layout: &str, layers: Vec<FlatLayer>) -> Self {
        Self {
            version: Some(1),
            layout: Some(layout.to_string()),
            layers: Some(layers),
            extra: Map::new(),
        }
    }

    /// Number of layers in the document.
    pub fn layer_count(&self) -> usize {
        self.layers.as_ref().map_or(0, Vec::len)
    }
}

/// Layout-editor grid keymap dump: layers of `[row][col]` tokens.
///
/// Everything besides the layer grid passes through untouched so an updated
/// dump keeps whatever else the editor stored in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridKeymapJson {
    /// Layer grids, indexed layer → row → col
    pub layout: Vec<GridLayer>,
    /// Fields we do not interpret but must not drop on rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_deserializes_numbers_before_strings() {
        let tokens: Vec<KeyToken> = serde_json::from_str(r#"[4, "KC_B", "0x7E40"]"#).unwrap();
        assert_eq!(tokens[0], KeyToken::Code(4));
        assert_eq!(tokens[1], KeyToken::Name("KC_B".to_string()));
        assert_eq!(tokens[2], KeyToken::Name("0x7E40".to_string()));
    }

    #[test]
    fn test_code_value_parses_all_spellings() {
        assert_eq!(KeyToken::Code(4).code_value(), Some(4));
        assert_eq!(
            KeyToken::Name("0x7E40".to_string()).code_value(),
            Some(0x7E40)
        );
        assert_eq!(KeyToken::Name("42".to_string()).code_value(), Some(42));
        assert_eq!(KeyToken::Name("KC_A".to_string()).code_value(), None);
        assert_eq!(KeyToken::Name(String::new()).code_value(), None);
    }

    #[test]
    fn test_into_name_renders_canonical_hex() {
        assert_eq!(
            KeyToken::Code(4).into_name(),
            KeyToken::Name("0x0004".to_string())
        );
        assert_eq!(
            KeyToken::Name("KC_A".to_string()).into_name(),
            KeyToken::Name("KC_A".to_string())
        );
    }

    #[test]
    fn test_keymap_round_trip_preserves_extra_fields() {
        let json = r#"{"version": 1, "layout": "LAYOUT", "layers": [["KC_A"]], "notes": "hi"}"#;
        let keymap: KeymapJson = serde_json::from_str(json).unwrap();
        assert_eq!(keymap.layer_count(), 1);
        let out = serde_json::to_value(&keymap).unwrap();
        assert_eq!(out["notes"], "hi");
    }

    #[test]
    fn test_grid_keymap_shape() {
        let json = r#"{"layout": [[["KC_A", "KC_B"]]], "uid": 7}"#;
        let grid: GridKeymapJson = serde_json::from_str(json).unwrap();
        assert_eq!(grid.layout.len(), 1);
        assert_eq!(grid.layout[0][0].len(), 2);
        let out = serde_json::to_value(&grid).unwrap();
        assert_eq!(out["uid"], 7);
    }
}
