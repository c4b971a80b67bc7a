//! Grid-dump to flat-keymap conversion command.

use clap::Args;
use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::models::{CodeTableJson, KeyboardJson, KeymapJson};
use crate::parser::read_json;
use crate::services::{apply_code_names, parse_layers, LayoutMap};

/// Convert a layout-editor grid keymap dump into a flat firmware keymap
#[derive(Debug, Clone, Args)]
pub struct FlattenArgs {
    /// Path to the grid keymap dump
    #[arg(long, value_name = "FILE")]
    pub grid_json: PathBuf,

    /// Path to the keyboard description mapping matrix positions to flat
    /// indices
    #[arg(long, value_name = "FILE")]
    pub keyboard_json: PathBuf,

    /// Path to a keycode table for resolving raw numeric codes to names
    #[arg(long, value_name = "FILE")]
    pub keycodes_json: Option<PathBuf>,

    /// Layout name in the keyboard description
    #[arg(long, value_name = "NAME", default_value = "LAYOUT")]
    pub layout_name: String,

    /// Write the keymap here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl FlattenArgs {
    /// Execute the flatten command
    pub fn execute(&self) -> CliResult<()> {
        let keyboard: KeyboardJson = read_json(&self.keyboard_json)
            .map_err(|e| CliError::io(format!("Failed to load keyboard description: {e:#}")))?;

        let layout_name = keyboard
            .resolve_layout_name(&self.layout_name)
            .map_err(|e| CliError::validation(format!("{e:#}")))?
            .to_string();
        let keys = keyboard
            .layout_keys(&layout_name)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let map = LayoutMap::from_layout(keys);

        let raw: Value = read_json(&self.grid_json)
            .map_err(|e| CliError::io(format!("Failed to load grid keymap dump: {e:#}")))?;
        let (source, raw_layers) = select_layer_source(&raw, &self.grid_json)?;

        let layers = parse_layers(raw_layers, source, &map)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        // Numeric tokens become names through the code table; unknown codes
        // keep their canonical hex spelling.
        let code_map = match self.keycodes_json.as_deref() {
            Some(path) => match read_json::<CodeTableJson>(path) {
                Ok(table) => table.to_code_map(),
                Err(e) => {
                    warn!("Failed to load keycodes from {}: {e:#}", path.display());
                    BTreeMap::new()
                }
            },
            None => BTreeMap::new(),
        };
        let layers = apply_code_names(layers, &code_map);

        let keymap = KeymapJson::new(&layout_name, layers);
        emit_json(&keymap, self.output.as_deref())?;
        info!("Flattened {} layers", keymap.layer_count());
        Ok(())
    }
}

/// Picks the field holding layer data out of the raw dump: `layers` when
/// present, then `layout`; a top-level array is taken as the layers
/// themselves.
fn select_layer_source<'a>(
    raw: &'a Value,
    path: &std::path::Path,
) -> CliResult<(&'static str, &'a Value)> {
    match raw {
        Value::Object(fields) => {
            if let Some(layers) = fields.get("layers") {
                Ok(("dump.layers", layers))
            } else if let Some(layout) = fields.get("layout") {
                Ok(("dump.layout", layout))
            } else {
                Err(CliError::validation(format!(
                    "Could not find layers in {}",
                    path.display()
                )))
            }
        }
        Value::Array(_) => Ok(("input", raw)),
        _ => Err(CliError::validation(format!(
            "Could not find layers in {}",
            path.display()
        ))),
    }
}
