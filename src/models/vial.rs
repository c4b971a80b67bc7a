//! Layout-editor (KLE-style) export document.
//!
//! The editor ingests a row-grouped key list where each entry is either a
//! properties object carrying deltas from the running cursor or a
//! `"row,col"` label naming the key's matrix coordinate.

use serde::{Deserialize, Serialize};

/// Per-key geometry properties; only values differing from the defaults are
/// present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KleKeyProps {
    /// Horizontal gap from the running cursor, in key units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Vertical gap from the previous row, in key units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Key width when not 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<f32>,
    /// Key height when not 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<f32>,
}

impl KleKeyProps {
    /// Whether any property is set.
    pub fn has_values(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.w.is_some() || self.h.is_some()
    }
}

/// One entry in a KLE row: a properties object or a `"row,col"` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KleEntry {
    /// Geometry properties applying to the following label
    Props(KleKeyProps),
    /// Matrix coordinate label
    Label(String),
}

/// One visual row of the keymap.
pub type KleRow = Vec<KleEntry>;

/// Matrix dimensions advertised to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VialMatrix {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

/// Layout container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VialLayouts {
    /// Row-grouped key geometry
    pub keymap: Vec<KleRow>,
}

/// Layout-editor export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VialJson {
    /// Keyboard display name
    pub name: String,
    /// USB vendor ID as a hex string
    #[serde(rename = "vendorId")]
    pub vendor_id: String,
    /// USB product ID as a hex string
    #[serde(rename = "productId")]
    pub product_id: String,
    /// Matrix dimensions
    pub matrix: VialMatrix,
    /// Key geometry
    pub layouts: VialLayouts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_props_and_labels() {
        let row: KleRow = vec![
            KleEntry::Props(KleKeyProps {
                x: Some(0.5),
                ..KleKeyProps::default()
            }),
            KleEntry::Label("0,0".to_string()),
        ];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"[{"x":0.5},"0,0"]"#);
    }

    #[test]
    fn test_entry_deserializes_untagged() {
        let row: KleRow = serde_json::from_str(r#"[{"w":1.5},"1,2","3,4"]"#).unwrap();
        assert_eq!(row.len(), 3);
        assert!(matches!(&row[0], KleEntry::Props(p) if p.w == Some(1.5)));
        assert!(matches!(&row[1], KleEntry::Label(l) if l == "1,2"));
    }

    #[test]
    fn test_props_has_values() {
        assert!(!KleKeyProps::default().has_values());
        let props = KleKeyProps {
            h: Some(2.0),
            ..KleKeyProps::default()
        };
        assert!(props.has_values());
    }
}
