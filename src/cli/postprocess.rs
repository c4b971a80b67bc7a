//! Keymap postprocessing command: custom-code names plus transparency.

use clap::Args;
use log::{info, warn};
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::models::{CodeTableJson, KeymapJson};
use crate::parser::read_json;
use crate::services::{apply_custom_codes, resolve_transparency};

/// Substitute custom-keycode names and resolve transparent keys in a flat
/// keymap
#[derive(Debug, Clone, Args)]
pub struct PostprocessArgs {
    /// Path to the flat keymap
    #[arg(value_name = "KEYMAP_JSON")]
    pub keymap_json: PathBuf,

    /// Path to the custom-keycode table
    #[arg(long, value_name = "FILE")]
    pub custom_keycodes_json: PathBuf,

    /// Write the keymap here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl PostprocessArgs {
    /// Execute the postprocess command
    pub fn execute(&self) -> CliResult<()> {
        let mut keymap: KeymapJson = read_json(&self.keymap_json)
            .map_err(|e| CliError::io(format!("Failed to load keymap: {e:#}")))?;

        if let Some(layers) = keymap.layers.as_mut() {
            // A missing custom table only skips the substitution pass.
            match read_json::<CodeTableJson>(&self.custom_keycodes_json) {
                Ok(table) => apply_custom_codes(layers, &table.to_code_map()),
                Err(e) => warn!(
                    "Could not load custom keycodes from {}: {e:#}",
                    self.custom_keycodes_json.display()
                ),
            }
            resolve_transparency(layers);
        }

        emit_json(&keymap, self.output.as_deref())?;
        info!("Processed keymap with {} layers", keymap.layer_count());
        Ok(())
    }
}
