//! Geometry-to-delta conversion for the layout-editor export.
//!
//! The editor's keymap format groups keys into visual rows and encodes
//! positions as deltas from a running cursor. Positions and sizes snap to a
//! quarter-unit grid first so floating-point noise never produces spurious
//! deltas.

use anyhow::{bail, Result};
use std::collections::BTreeMap;

use crate::models::{KleEntry, KleKeyProps, KleRow, LayoutKey, MatrixDimensions};

/// Sub-unit precision: positions snap to 1 / (1 << PRECISION) key units.
const PRECISION: u32 = 2;

/// Snaps a value to the nearest quarter unit.
fn round_unit(value: f32) -> f32 {
    let scale = (1u32 << PRECISION) as f32;
    (value * scale).round() / scale
}

/// Converts a layout's key list into row-grouped delta-encoded rows.
///
/// Keys group into rows by their snapped `y` position, which must be an
/// integer; fractional row offsets are unsupported. Every matrix-bound key
/// must fall inside the declared matrix dimensions.
pub fn build_kle_rows(keys: &[LayoutKey], dims: MatrixDimensions) -> Result<Vec<KleRow>> {
    let rows_by_y = group_rows(keys, dims)?;

    let mut kle_rows = Vec::with_capacity(rows_by_y.len());
    let mut cursor_y = 0i32;

    for (y, row_keys) in rows_by_y {
        let mut kle_row = build_row(&row_keys);

        // Rows advance the vertical cursor by one unit; a gap becomes a y
        // property on the row's first entry.
        let y_gap = y - cursor_y;
        if y_gap != 0 {
            attach_row_gap(&mut kle_row, y_gap as f32);
        }
        cursor_y = y + 1;

        kle_rows.push(kle_row);
    }

    Ok(kle_rows)
}

/// Groups keys by integer row position, validating matrix bounds.
fn group_rows(keys: &[LayoutKey], dims: MatrixDimensions) -> Result<BTreeMap<i32, Vec<&LayoutKey>>> {
    let mut rows: BTreeMap<i32, Vec<&LayoutKey>> = BTreeMap::new();

    for key in keys {
        if let Some([row, col]) = key.matrix {
            if usize::from(row) >= dims.rows || usize::from(col) >= dims.cols {
                bail!(
                    "Matrix position ({}, {}) is outside the declared {}x{} matrix",
                    row,
                    col,
                    dims.rows,
                    dims.cols
                );
            }
        }

        let y = round_unit(key.y);
        if y.fract() != 0.0 {
            bail!("Unsupported non-integer row position y={y}");
        }
        rows.entry(y as i32).or_default().push(key);
    }

    Ok(rows)
}

/// Builds one row: keys sorted by ascending x, each preceded by a
/// properties object when its geometry differs from the defaults.
fn build_row(row_keys: &[&LayoutKey]) -> KleRow {
    let mut sorted: Vec<&LayoutKey> = row_keys.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let mut row = KleRow::new();
    let mut cursor_x = 0.0f32;

    for key in sorted {
        let x = round_unit(key.x);
        let w = round_unit(key.w);
        let h = round_unit(key.h);

        let mut props = KleKeyProps::default();
        if x != cursor_x {
            props.x = Some(x - cursor_x);
        }
        if w != 1.0 {
            props.w = Some(w);
        }
        if h != 1.0 {
            props.h = Some(h);
        }
        if props.has_values() {
            row.push(KleEntry::Props(props));
        }

        row.push(KleEntry::Label(match key.matrix {
            Some([r, c]) => format!("{r},{c}"),
            None => "-1,-1".to_string(),
        }));

        cursor_x = x + w;
    }

    row
}

/// Records a vertical gap on the row's first entry, inserting a properties
/// object if the row starts with a label.
fn attach_row_gap(row: &mut KleRow, y_gap: f32) {
    match row.first_mut() {
        Some(KleEntry::Props(props)) => {
            props.y = Some(props.y.unwrap_or(0.0) + y_gap);
        }
        _ => {
            let props = KleKeyProps {
                y: Some(y_gap),
                ..KleKeyProps::default()
            };
            row.insert(0, KleEntry::Props(props));
        }
    }
}
