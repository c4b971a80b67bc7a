//! Keycode table documents and canonical hex-code rendering.
//!
//! Code tables map a 16-bit key code, rendered canonically as a 4-digit
//! uppercase hex string such as `0x0004`, to exactly one symbolic name.
//! Fixed-width uppercase keys make lexicographic order equal numeric order,
//! so a `BTreeMap` keeps the document sorted by ascending code.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

/// Renders a code in the canonical `0xHHHH` spelling.
pub fn format_code(code: u16) -> String {
    format!("0x{code:04X}")
}

/// Parses a `0x`/`0X`-prefixed hex code string. Returns `None` for anything
/// that is not a hex spelling or does not fit in 16 bits.
pub fn parse_hex_code(text: &str) -> Option<u16> {
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

/// Code table document: hex-code string → canonical name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTableJson(pub BTreeMap<String, String>);

impl CodeTableJson {
    /// Builds a document from numeric codes, rendering canonical hex keys.
    pub fn from_codes(codes: BTreeMap<u16, String>) -> Self {
        Self(
            codes
                .into_iter()
                .map(|(code, name)| (format_code(code), name))
                .collect(),
        )
    }

    /// Converts the document to a numeric code → name map.
    ///
    /// Entries whose key is not a hex code are skipped with a warning; the
    /// generated tables never contain such keys, but hand-edited ones might.
    pub fn to_code_map(&self) -> BTreeMap<u16, String> {
        let mut map = BTreeMap::new();
        for (key, name) in &self.0 {
            match parse_hex_code(key) {
                Some(code) => {
                    map.insert(code, name.clone());
                }
                None => log::warn!("Skipping non-hex keycode entry: {key}"),
            }
        }
        map
    }

    /// Looks up the numeric code assigned to a name.
    pub fn code_for_name(&self, wanted: &str) -> Option<u16> {
        self.0.iter().find_map(|(key, name)| {
            if name == wanted {
                parse_hex_code(key)
            } else {
                None
            }
        })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered trigger-key → layer-name mapping document.
///
/// Layer names are positional (`L0`, `L1`, …), so the document serializes
/// its pairs in discovery order rather than key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerNameMapping(pub Vec<(String, String)>);

impl Serialize for LayerNameMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, name) in &self.0 {
            map.serialize_entry(key, name)?;
        }
        map.end()
    }
}
