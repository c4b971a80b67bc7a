//! Canonical keycode table generation command.

use clap::Args;
use log::info;
use std::path::PathBuf;

use crate::cli::common::{emit_json, CliError, CliResult};
use crate::models::CodeTableJson;
use crate::parser::read_json;
use crate::services::{build_code_table, find_latest_spec, KeycodeSpec};

/// Generate a canonical keycode table from a firmware keycode specification
#[derive(Debug, Clone, Args)]
pub struct KeycodesArgs {
    /// Path to a keycode specification JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "qmk_path")]
    pub spec: Option<PathBuf>,

    /// Path to a firmware tree; the newest specification under
    /// data/constants/keycodes/ is used
    #[arg(long, value_name = "DIR")]
    pub qmk_path: Option<PathBuf>,

    /// Write the table here instead of standard output
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl KeycodesArgs {
    /// Execute the keycodes command
    pub fn execute(&self) -> CliResult<()> {
        let spec_path = match (&self.spec, &self.qmk_path) {
            (Some(spec), _) => spec.clone(),
            (None, Some(qmk_path)) => find_latest_spec(qmk_path)
                .map_err(|e| CliError::io(format!("{e:#}")))?,
            (None, None) => {
                return Err(CliError::validation(
                    "Either --spec or --qmk-path is required",
                ));
            }
        };

        let spec: KeycodeSpec = read_json(&spec_path)
            .map_err(|e| CliError::io(format!("Failed to load keycode specification: {e:#}")))?;

        let table = CodeTableJson::from_codes(build_code_table(&spec));
        if table.is_empty() {
            return Err(CliError::validation(format!(
                "No keycodes found in specification {}",
                spec_path.display()
            )));
        }

        emit_json(&table, self.output.as_deref())?;
        info!("Generated keycode table with {} entries", table.len());
        Ok(())
    }
}
