//! Input parsing: JSON document files and text-pattern scans of C source.

pub mod c_source;
pub mod json_file;

pub use c_source::{
    extract_custom_keycodes_block, extract_notifier_entries, split_entries, strip_c_comments,
};
pub use json_file::{read_json, to_pretty_string, write_json};
