//! CLI command handlers.
//!
//! Each conversion is an independent subcommand: a `clap::Args` struct with
//! an `execute()` method. Commands write their JSON document to standard
//! output (or `--output`) and log diagnostics to standard error.

pub mod common;
pub mod custom_keycodes;
pub mod flatten;
pub mod inspect;
pub mod keycodes;
pub mod layer_names;
pub mod postprocess;
pub mod unflatten;
pub mod vial;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use custom_keycodes::CustomKeycodesArgs;
pub use flatten::FlattenArgs;
pub use inspect::InspectArgs;
pub use keycodes::KeycodesArgs;
pub use layer_names::LayerNamesArgs;
pub use postprocess::PostprocessArgs;
pub use unflatten::UnflattenArgs;
pub use vial::VialArgs;
