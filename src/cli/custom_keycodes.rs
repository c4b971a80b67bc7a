//! Custom-keycode extraction command.

use clap::Args;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::models::CodeTableJson;
use crate::parser::read_json;
use crate::services::{extract_custom_codes, safe_range_start};

/// Extract custom keycodes from a firmware keymap source
#[derive(Debug, Clone, Args)]
pub struct CustomKeycodesArgs {
    /// Path to the keymap C source
    #[arg(value_name = "KEYMAP_C")]
    pub keymap_c: PathBuf,

    /// Path to a keycode table providing the SAFE_RANGE base
    #[arg(long, value_name = "FILE")]
    pub keycodes_json: PathBuf,

    /// Write the table here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CustomKeycodesArgs {
    /// Execute the custom-keycodes command
    pub fn execute(&self) -> CliResult<()> {
        let table: CodeTableJson = read_json(&self.keycodes_json)
            .map_err(|e| CliError::io(format!("Failed to load keycode table: {e:#}")))?;
        let base = safe_range_start(&table).map_err(|e| CliError::validation(format!("{e:#}")))?;

        let source = fs::read_to_string(&self.keymap_c).map_err(|e| {
            CliError::io(format!(
                "Failed to read {}: {e}",
                self.keymap_c.display()
            ))
        })?;

        let codes = extract_custom_codes(&source, base)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let custom = CodeTableJson::from_codes(codes);

        emit_json(&custom, self.output.as_deref())?;
        info!("Generated {} custom keycodes", custom.len());
        Ok(())
    }
}
