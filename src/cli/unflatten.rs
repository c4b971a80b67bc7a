//! Flat-keymap to grid-dump conversion command.

use clap::Args;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::models::{format_code, CodeTableJson, GridKeymapJson, KeyToken, KeyboardJson, KeymapJson};
use crate::parser::read_json;
use crate::services::LayoutMap;

/// Update a layout-editor grid keymap dump from a flat firmware keymap
#[derive(Debug, Clone, Args)]
pub struct UnflattenArgs {
    /// Path to the source flat keymap
    #[arg(long, value_name = "FILE")]
    pub keymap_json: PathBuf,

    /// Path to the base grid keymap dump to update
    #[arg(long, value_name = "FILE")]
    pub grid_json: PathBuf,

    /// Path to the keyboard description mapping flat indices to matrix
    /// positions
    #[arg(long, value_name = "FILE")]
    pub keyboard_json: PathBuf,

    /// Path to a custom-keycode table for mapping names back to raw codes
    #[arg(long, value_name = "FILE")]
    pub custom_keycodes_json: Option<PathBuf>,

    /// Layout name in the keyboard description
    #[arg(long, value_name = "NAME", default_value = "LAYOUT")]
    pub layout_name: String,

    /// Write the updated dump here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl UnflattenArgs {
    /// Execute the unflatten command
    pub fn execute(&self) -> CliResult<()> {
        let keymap: KeymapJson = read_json(&self.keymap_json)
            .map_err(|e| CliError::io(format!("Failed to load keymap: {e:#}")))?;
        let mut dump: GridKeymapJson = read_json(&self.grid_json)
            .map_err(|e| CliError::io(format!("Failed to load grid keymap dump: {e:#}")))?;
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

        let reverse = self.load_reverse_custom_map();

        let layers = keymap.layers.unwrap_or_default();
        let mut grids = Vec::with_capacity(layers.len());
        for (layer_idx, mut layer) in layers.into_iter().enumerate() {
            // The editor stores custom keys as raw codes, not names.
            for token in &mut layer {
                if let Some(hex) = token.as_name().and_then(|name| reverse.get(name)) {
                    *token = KeyToken::Name(hex.clone());
                }
            }
            let grid = map
                .unflatten_layer(layer_idx, &layer)
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
            grids.push(grid);
        }

        dump.layout = grids;
        emit_json(&dump, self.output.as_deref())?;
        info!("Updated grid keymap dump with {} layers", dump.layout.len());
        Ok(())
    }

    /// Loads the custom-keycode table and inverts it to name → canonical
    /// hex spelling. Failures only cost the reverse mapping, never the run.
    fn load_reverse_custom_map(&self) -> BTreeMap<String, String> {
        let Some(path) = self.custom_keycodes_json.as_deref() else {
            return BTreeMap::new();
        };
        match read_json::<CodeTableJson>(path) {
            Ok(table) => table
                .to_code_map()
                .into_iter()
                .map(|(code, name)| (name, format_code(code)))
                .collect(),
            Err(e) => {
                warn!(
                    "Failed to load custom keycodes from {}: {e:#}",
                    path.display()
                );
                BTreeMap::new()
            }
        }
    }
}
