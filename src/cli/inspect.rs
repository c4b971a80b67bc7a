//! Keymap summary command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::models::KeymapJson;
use crate::parser::read_json;

/// Show summary information about a flat keymap
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the flat keymap
    #[arg(value_name = "KEYMAP_JSON")]
    pub keymap_json: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for the inspect command
#[derive(Debug, Serialize)]
struct InspectResponse {
    /// Document version
    version: Option<u32>,
    /// Layout name
    layout: Option<String>,
    /// Number of layers
    layer_count: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let keymap: KeymapJson = read_json(&self.keymap_json)
            .map_err(|e| CliError::io(format!("Failed to load keymap: {e:#}")))?;

        if self.json {
            let response = InspectResponse {
                version: keymap.version,
                layout: keymap.layout.clone(),
                layer_count: keymap.layer_count(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}", keymap.layer_count());
        }

        Ok(())
    }
}
