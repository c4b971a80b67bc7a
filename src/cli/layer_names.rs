//! Trigger-key to layer-name mapping command.

use clap::Args;
use log::info;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::parser::extract_notifier_entries;
use crate::services::build_layer_mapping;

/// Generate a trigger-key to layer-name mapping from a keymap source
#[derive(Debug, Clone, Args)]
pub struct LayerNamesArgs {
    /// Path to the keymap C source
    #[arg(long, value_name = "FILE")]
    pub keymap_c: PathBuf,

    /// Prefix for generated layer names
    #[arg(long, value_name = "PREFIX", default_value = "")]
    pub prefix: String,

    /// Write the mapping here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LayerNamesArgs {
    /// Execute the layer-names command
    pub fn execute(&self) -> CliResult<()> {
        let source = fs::read_to_string(&self.keymap_c).map_err(|e| {
            CliError::io(format!(
                "Failed to read {}: {e}",
                self.keymap_c.display()
            ))
        })?;

        let entries = extract_notifier_entries(&source)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        let mapping = build_layer_mapping(&entries, &self.prefix)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        emit_json(&mapping, self.output.as_deref())?;
        info!("Generated layer-name mapping for {} triggers", mapping.0.len());
        Ok(())
    }
}
