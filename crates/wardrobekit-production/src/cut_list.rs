//! Flat cut-list rows for exporters.

use serde::{Deserialize, Serialize};
use wardrobekit_core::{format_length, MeasurementSystem};

use crate::cad_group::CadGroup;
use crate::overrides::PanelOverrides;
use crate::panel::PanelType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutListRow {
    pub panel_id: String,
    pub room_name: String,
    pub unit_label: String,
    pub unit_code: String,
    pub label: String,
    pub panel_type: PanelType,
    pub width_mm: f64,
    pub height_mm: f64,
    pub overridden: bool,
}

impl CutListRow {
    /// `W x H` in the requested measurement system.
    pub fn size_label(&self, system: MeasurementSystem) -> String {
        format!(
            "{} x {}",
            format_length(self.width_mm, system),
            format_length(self.height_mm, system)
        )
    }

    pub fn area_m2(&self) -> f64 {
        self.width_mm * self.height_mm / 1_000_000.0
    }
}

/// One row per panel in group order, shutters before lofts, with overridden
/// dimensions taking precedence.
pub fn cut_list(groups: &[CadGroup], overrides: &PanelOverrides) -> Vec<CutListRow> {
    groups
        .iter()
        .flat_map(|group| {
            let unit_label = group.unit_label();
            group.panels().map(move |panel| CutListRow {
                panel_id: panel.item.id.clone(),
                room_name: group.room_name.clone(),
                unit_label: unit_label.clone(),
                unit_code: group.unit_code.clone(),
                label: panel.label.clone(),
                panel_type: panel.item.panel_type,
                width_mm: overrides.width_for(&panel.item),
                height_mm: overrides.height_for(&panel.item),
                overridden: overrides.get(&panel.item.id).is_some(),
            })
        })
        .collect()
}
