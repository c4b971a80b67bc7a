//! Custom-keycode extraction from a firmware keymap source.
//!
//! Enumerators in the `enum custom_keycodes` block receive sequential codes
//! starting at the firmware's safe range, the first code free for
//! user-defined keys, looked up by name from a keycode table.

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::models::{CodeTableJson, FlatLayer, KeyToken};
use crate::parser::{extract_custom_keycodes_block, split_entries};

/// Name of the safe-range marker in firmware headers and keycode tables.
pub const SAFE_RANGE_NAME: &str = "SAFE_RANGE";

/// Looks up the safe-range base code in a keycode table.
pub fn safe_range_start(table: &CodeTableJson) -> Result<u16> {
    table
        .code_for_name(SAFE_RANGE_NAME)
        .with_context(|| format!("{SAFE_RANGE_NAME} not found in keycode table"))
}

/// Assigns sequential codes to the enumerators of a keymap source's
/// `enum custom_keycodes` block.
///
/// An explicit `NAME = SAFE_RANGE` assignment resets the running counter to
/// the base before the entry is assigned; any other explicit value is not
/// interpreted and the entry takes the current counter. The counter always
/// increments by one afterwards. A reset can land an entry on an
/// already-assigned code, silently overwriting it; callers rely on that
/// behavior, so it is kept as-is.
pub fn extract_custom_codes(source: &str, base: u16) -> Result<BTreeMap<u16, String>> {
    let block = extract_custom_keycodes_block(source)?;
    let entries = split_entries(&block)?;

    let mut current = base;
    let mut codes = BTreeMap::new();

    for entry in &entries {
        let name = match entry.split_once('=') {
            Some((name, value)) => {
                if value.trim() == SAFE_RANGE_NAME {
                    current = base;
                }
                name.trim().to_string()
            }
            None => entry.clone(),
        };

        if let Some(shadowed) = codes.insert(current, name) {
            log::warn!("Custom keycode {shadowed} lost its slot to a later entry");
        }
        current += 1;
    }

    Ok(codes)
}

/// Substitutes custom-code names for numeric-valued tokens in place.
///
/// Every token denoting a numeric code (a raw number, a `0x` hex string,
/// or a plain decimal string) that appears in the table is replaced by its
/// name. Everything else is left alone.
pub fn apply_custom_codes(layers: &mut [FlatLayer], table: &BTreeMap<u16, String>) {
    for layer in layers {
        for token in layer {
            if let Some(code) = token.code_value() {
                if let Some(name) = table.get(&code) {
                    *token = KeyToken::Name(name.clone());
                }
            }
        }
    }
}
