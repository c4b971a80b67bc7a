//! Layout-matrix flattening and unflattening.
//!
//! A physical layout's ordered key list defines a flat index for every key:
//! the key's position in the sequence. Flattening turns a `[row][col]` grid
//! layer into the flat token list firmware keymaps use; unflattening
//! distributes a flat layer back onto a matrix grid through the same
//! mapping, inverted.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::{FlatLayer, GridLayer, KeyToken, LayoutKey, MatrixDimensions};

/// Positional mapping between matrix coordinates and flat indices, built
/// once per invocation from a layout's key list.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    /// (row, col) → flat index
    by_position: HashMap<(u8, u8), usize>,
    /// flat index → (row, col); `None` for keys not bound to the matrix
    positions: Vec<Option<(u8, u8)>>,
}

impl LayoutMap {
    /// Builds the mapping from a layout's key list. Keys without a matrix
    /// coordinate keep their flat index but map no position; a duplicate
    /// coordinate logs a warning and the later key wins.
    pub fn from_layout(keys: &[LayoutKey]) -> Self {
        let mut by_position = HashMap::new();
        let mut positions = Vec::with_capacity(keys.len());

        for (index, key) in keys.iter().enumerate() {
            let Some([row, col]) = key.matrix else {
                positions.push(None);
                continue;
            };
            positions.push(Some((row, col)));
            if let Some(previous) = by_position.insert((row, col), index) {
                log::warn!(
                    "Duplicate matrix position ({row}, {col}): flat index {previous} shadowed by {index}"
                );
            }
        }

        Self {
            by_position,
            positions,
        }
    }

    /// Whether the layout binds no keys to the matrix.
    pub fn is_empty(&self) -> bool {
        self.by_position.is_empty()
    }

    /// Number of matrix-bound keys.
    pub fn len(&self) -> usize {
        self.by_position.len()
    }

    /// Length of a flattened layer: highest mapped flat index plus one.
    fn flat_len(&self) -> usize {
        self.by_position.values().max().map_or(0, |max| max + 1)
    }

    /// Smallest grid able to hold every mapped position.
    pub fn grid_dimensions(&self) -> Result<MatrixDimensions> {
        if self.is_empty() {
            bail!("Layout has no matrix-bound keys");
        }
        let mut max_row = 0u8;
        let mut max_col = 0u8;
        for &(row, col) in self.by_position.keys() {
            max_row = max_row.max(row);
            max_col = max_col.max(col);
        }
        Ok(MatrixDimensions {
            rows: usize::from(max_row) + 1,
            cols: usize::from(max_col) + 1,
        })
    }

    /// Flattens a grid layer into a flat token list.
    ///
    /// The output covers every flat index up to the highest mapped one;
    /// positions the grid does not supply stay `KC_NO`. Grid positions
    /// outside the mapping are ignored; the grid may legitimately be
    /// larger than the layout.
    pub fn flatten_layer(&self, grid: &GridLayer) -> Result<FlatLayer> {
        if self.is_empty() {
            bail!("Layout map is empty: the layout binds no keys to the matrix");
        }

        let mut flat = vec![KeyToken::no_op(); self.flat_len()];
        for (r, row) in grid.iter().enumerate() {
            for (c, token) in row.iter().enumerate() {
                let position = (r as u8, c as u8);
                if let Some(&index) = self.by_position.get(&position) {
                    flat[index] = token.clone();
                }
            }
        }
        Ok(flat)
    }

    /// Distributes a flat layer back onto a `(rows, cols)` grid.
    ///
    /// Grid positions the layout never references stay `KC_NO`; flat
    /// indices without a matrix binding are skipped. Trailing tokens beyond
    /// the layout are keys outside the declared physical layout; they are
    /// dropped with a warning.
    pub fn unflatten_layer(&self, layer_idx: usize, flat: &FlatLayer) -> Result<GridLayer> {
        let dims = self.grid_dimensions()?;
        let mut grid = vec![vec![KeyToken::no_op(); dims.cols]; dims.rows];

        for (index, token) in flat.iter().enumerate() {
            let Some(position) = self.positions.get(index) else {
                log::warn!(
                    "Layer {layer_idx} has more keys than the layout definition, dropping the rest"
                );
                break;
            };
            if let Some((row, col)) = position {
                grid[usize::from(*row)][usize::from(*col)] = token.clone();
            }
        }
        Ok(grid)
    }
}

/// Parses raw layer data whose shape is ambiguous.
///
/// The 2-D grid interpretation (layer → row → col) is attempted first and
/// flattened through the layout map; only if that fails is the data treated
/// as already-flat layers. If neither parse succeeds the error names the
/// offending source.
pub fn parse_layers(raw: &Value, source: &str, map: &LayoutMap) -> Result<Vec<FlatLayer>> {
    if let Ok(grid_layers) = serde_json::from_value::<Vec<GridLayer>>(raw.clone()) {
        return grid_layers
            .iter()
            .map(|layer| map.flatten_layer(layer))
            .collect();
    }

    serde_json::from_value::<Vec<FlatLayer>>(raw.clone())
        .with_context(|| format!("Invalid {source} layers: expected grid or flat layer lists"))
}
