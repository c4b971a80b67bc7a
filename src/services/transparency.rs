//! Transparency resolution across a layer stack.
//!
//! A transparent entry means "inherit the value from the layer below at
//! this position". Resolution scans strictly backward through lower layers
//! and substitutes the nearest concrete value in place.

use crate::models::{FlatLayer, KeyToken};

/// The placeholder spellings treated as transparent.
pub const TRANSPARENT_NAMES: [&str; 3] = ["KC_TRNS", "KC_TRANSPARENT", "_______"];

/// Whether a token is a transparency placeholder.
pub fn is_transparent(token: &KeyToken) -> bool {
    token
        .as_name()
        .is_some_and(|name| TRANSPARENT_NAMES.contains(&name))
}

/// Resolves transparent entries in place.
///
/// For every layer after the first, each placeholder takes the nearest
/// non-placeholder value at the same index in a lower layer. Shorter lower
/// layers simply do not supply a value for out-of-range indices and the
/// search continues downward. Placeholders with no concrete value below
/// stay unresolved. The pass is idempotent.
pub fn resolve_transparency(layers: &mut [FlatLayer]) {
    for i in 1..layers.len() {
        for idx in 0..layers[i].len() {
            if !is_transparent(&layers[i][idx]) {
                continue;
            }
            for j in (0..i).rev() {
                if idx >= layers[j].len() {
                    continue;
                }
                if !is_transparent(&layers[j][idx]) {
                    let value = layers[j][idx].clone();
                    layers[i][idx] = value;
                    break;
                }
            }
        }
    }
}
