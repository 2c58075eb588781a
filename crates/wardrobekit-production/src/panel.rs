//! Production panel rows as emitted by the extraction step.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PanelType {
    Shutter,
    Loft,
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutter => write!(f, "Shutter"),
            Self::Loft => write!(f, "Loft"),
        }
    }
}

/// One physical panel to be cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionPanelItem {
    pub id: String,
    pub room_index: usize,
    pub room_name: String,
    pub unit_id: String,
    /// Unit type as drawn, e.g. "Wardrobe" or "TV Unit".
    pub unit_name: String,
    pub panel_type: PanelType,
    pub width_mm: f64,
    pub height_mm: f64,
    /// Row within the unit's panel grid, 0 at the top.
    #[serde(default)]
    pub row: usize,
    /// Column within the unit's panel grid, 0 at the left.
    #[serde(default)]
    pub col: usize,
}

impl ProductionPanelItem {
    pub fn new(
        id: impl Into<String>,
        panel_type: PanelType,
        width_mm: f64,
        height_mm: f64,
    ) -> Self {
        Self {
            id: id.into(),
            room_index: 0,
            room_name: String::new(),
            unit_id: String::new(),
            unit_name: String::new(),
            panel_type,
            width_mm,
            height_mm,
            row: 0,
            col: 0,
        }
    }

    pub fn in_room(mut self, room_index: usize, room_name: impl Into<String>) -> Self {
        self.room_index = room_index;
        self.room_name = room_name.into();
        self
    }

    pub fn in_unit(mut self, unit_id: impl Into<String>, unit_name: impl Into<String>) -> Self {
        self.unit_id = unit_id.into();
        self.unit_name = unit_name.into();
        self
    }

    pub fn at(mut self, row: usize, col: usize) -> Self {
        self.row = row;
        self.col = col;
        self
    }

    pub fn is_shutter(&self) -> bool {
        self.panel_type == PanelType::Shutter
    }

    pub fn is_loft(&self) -> bool {
        self.panel_type == PanelType::Loft
    }
}
