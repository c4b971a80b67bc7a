//! Data models for the JSON documents exchanged between keyboard tools.
//!
//! Every entity here is created fresh from parsed input for the duration of
//! one conversion and discarded after serialization; nothing persists
//! between runs.

pub mod codes;
pub mod keyboard;
pub mod keymap;
pub mod vial;

// Re-export the document types
pub use codes::{format_code, parse_hex_code, CodeTableJson, LayerNameMapping};
pub use keyboard::{
    KeyboardJson, LayoutDefinition, LayoutKey, MatrixDimensions, MatrixPins, SplitConfig,
    UsbConfig,
};
pub use keymap::{FlatLayer, GridKeymapJson, GridLayer, KeyToken, KeymapJson};
pub use vial::{KleEntry, KleKeyProps, KleRow, VialJson, VialLayouts, VialMatrix};
