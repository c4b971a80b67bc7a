//! Layout-editor (KLE-style) export command.

use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::models::{KeyboardJson, VialJson, VialLayouts, VialMatrix};
use crate::parser::read_json;
use crate::services::build_kle_rows;

/// Convert a keyboard description into a layout-editor export
#[derive(Debug, Clone, Args)]
pub struct VialArgs {
    /// Path to the keyboard description
    #[arg(long, value_name = "FILE")]
    pub keyboard_json: PathBuf,

    /// Layout name in the keyboard description
    #[arg(long, value_name = "NAME")]
    pub layout_name: String,

    /// Write the export here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl VialArgs {
    /// Execute the vial command
    pub fn execute(&self) -> CliResult<()> {
        let keyboard: KeyboardJson = read_json(&self.keyboard_json)
            .map_err(|e| CliError::io(format!("Failed to load keyboard description: {e:#}")))?;

        let name = keyboard
            .keyboard_name
            .clone()
            .ok_or_else(|| CliError::validation("Keyboard description has no keyboard_name"))?;
        let usb = keyboard
            .usb
            .clone()
            .ok_or_else(|| CliError::validation("Keyboard description has no usb section"))?;

        let dims = keyboard
            .matrix_dimensions()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let keys = keyboard
            .layout_keys(&self.layout_name)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let keymap = build_kle_rows(keys, dims)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let vial = VialJson {
            name,
            vendor_id: usb.vid,
            product_id: usb.pid,
            matrix: VialMatrix {
                rows: dims.rows,
                cols: dims.cols,
            },
            layouts: VialLayouts { keymap },
        };

        emit_json(&vial, self.output.as_deref())?;
        info!(
            "Generated layout-editor export from {}",
            self.keyboard_json.display()
        );
        Ok(())
    }
}
