//! The conversion transforms.
//!
//! Each service is a deterministic, single-pass transform over in-memory
//! tables; the CLI layer wires them to files.

pub mod custom_codes;
pub mod keycode_table;
pub mod kle;
pub mod layer_names;
pub mod layout_map;
pub mod transparency;

pub use custom_codes::{apply_custom_codes, extract_custom_codes, safe_range_start};
pub use keycode_table::{apply_code_names, build_code_table, find_latest_spec, KeycodeSpec};
pub use kle::build_kle_rows;
pub use layer_names::build_layer_mapping;
pub use layout_map::{parse_layers, LayoutMap};
pub use transparency::{is_transparent, resolve_transparency};
