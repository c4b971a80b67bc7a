//! Keymap Conversion Library
//!
//! This library provides the core functionality behind the `keymapconv`
//! command-line tool: parsing keyboard description and keymap JSON
//! documents, flattening matrix-indexed layers through a physical layout,
//! resolving keycode names and transparency, extracting custom keycodes
//! from firmware C source, and exporting layout-editor geometry.

// Module declarations
pub mod cli;
pub mod models;
pub mod parser;
pub mod services;
