//! Keyboard description document (`keyboard.json` / `info.json`).
//!
//! This module models the firmware's keyboard description: physical layouts,
//! matrix pin assignments, USB identifiers, and the optional split-keyboard
//! configuration. The layout key order is load-bearing: it defines the flat
//! index of every key and must never be re-sorted.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Physical key position from a layout definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutKey {
    /// Physical X position in keyboard units
    pub x: f32,
    /// Physical Y position in keyboard units
    pub y: f32,
    /// Electrical matrix position [row, col]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<[u8; 2]>,
    /// Key width in keyboard units (default 1.0)
    #[serde(default = "default_key_size")]
    pub w: f32,
    /// Key height in keyboard units (default 1.0)
    #[serde(default = "default_key_size")]
    pub h: f32,
    /// Optional legend shown on the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn default_key_size() -> f32 {
    1.0
}

/// A named physical layout: an ordered list of keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDefinition {
    /// Physical key positions in flat-index order
    pub layout: Vec<LayoutKey>,
}

/// Matrix pin assignments. Entries may be `null` for unconnected pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixPins {
    /// Row pins
    pub rows: Vec<Option<String>>,
    /// Column pins
    pub cols: Vec<Option<String>>,
}

/// Split-keyboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Whether the split feature is enabled
    #[serde(default)]
    pub enabled: bool,
    /// Per-side matrix pins for the secondary half ("left" or "right")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix_pins: Option<BTreeMap<String, MatrixPins>>,
}

/// USB identifiers from the keyboard description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsbConfig {
    /// Vendor ID as a hex string (e.g. "0xFEED")
    pub vid: String,
    /// Product ID as a hex string
    pub pid: String,
    /// Device version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_version: Option<String>,
}

/// Matrix dimensions in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixDimensions {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

/// Keyboard description document (simplified to the fields we exchange).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardJson {
    /// Keyboard display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyboard_name: Option<String>,
    /// Available layouts by name
    pub layouts: BTreeMap<String, LayoutDefinition>,
    /// USB identifiers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usb: Option<UsbConfig>,
    /// Matrix pin assignments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix_pins: Option<MatrixPins>,
    /// Split-keyboard configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<SplitConfig>,
}

impl KeyboardJson {
    /// Returns the key list of the named layout.
    pub fn layout_keys(&self, layout_name: &str) -> Result<&[LayoutKey]> {
        let def = self.layouts.get(layout_name).with_context(|| {
            format!(
                "Layout '{}' not found. Available layouts: {:?}",
                layout_name,
                self.layouts.keys().collect::<Vec<_>>()
            )
        })?;
        Ok(&def.layout)
    }

    /// Resolves a layout name, falling back to the first available layout
    /// (in name order) when the requested one is absent.
    pub fn resolve_layout_name<'a>(&'a self, layout_name: &'a str) -> Result<&'a str> {
        if self.layouts.contains_key(layout_name) {
            return Ok(layout_name);
        }
        let fallback = self
            .layouts
            .keys()
            .next()
            .context("No layouts found in keyboard description")?;
        log::warn!("Layout '{layout_name}' not found, falling back to '{fallback}'");
        Ok(fallback)
    }

    /// Derives the matrix dimensions from the declared pin counts, extended
    /// by the split keyboard's second half when one is declared.
    ///
    /// Exactly one split side named `left` or `right` is supported; a split
    /// configuration declaring both sides (or an unknown side) is an error,
    /// never a guess.
    pub fn matrix_dimensions(&self) -> Result<MatrixDimensions> {
        let pins = self
            .matrix_pins
            .as_ref()
            .context("Keyboard description declares no matrix pins")?;

        let mut rows = pins.rows.len();
        let cols = pins.cols.len();
        if rows == 0 || cols == 0 {
            bail!("Matrix pin lists must not be empty");
        }

        if let Some(split) = &self.split {
            if let Some(side_pins) = &split.matrix_pins {
                if side_pins.len() != 1 {
                    bail!(
                        "Unsupported split configuration: expected exactly one side, found {:?}",
                        side_pins.keys().collect::<Vec<_>>()
                    );
                }
                let (side, pins_for_side) = side_pins
                    .iter()
                    .next()
                    .context("Split matrix pins are empty")?;
                if side != "left" && side != "right" {
                    bail!("Unsupported split side '{side}': expected \"left\" or \"right\"");
                }
                if pins_for_side.cols.len() > cols {
                    bail!(
                        "Split side '{}' declares {} columns but the base matrix has {}",
                        side,
                        pins_for_side.cols.len(),
                        cols
                    );
                }
                rows += pins_for_side.rows.len();
            }
        }

        Ok(MatrixDimensions { rows, cols })
    }
}
