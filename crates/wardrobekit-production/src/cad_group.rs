//! Grouping cut panels into per-unit production grids.
//!
//! Panels are grouped by room and unit. Units are numbered per room in the
//! order they first appear in the input, so reordering the input renumbers the
//! units. Each group derives its grid from its panels: a column is as wide as
//! its widest panel, a row as tall as its tallest.

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::codes::{room_code, unit_code};
use crate::panel::{PanelType, ProductionPanelItem};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPanel {
    pub label: String,
    pub item: ProductionPanelItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadGroup {
    pub room_index: usize,
    pub room_name: String,
    pub room_code: String,
    pub unit_id: String,
    pub unit_name: String,
    pub unit_code: String,
    /// 1-based, per room, in order of first appearance.
    pub unit_number: usize,
    pub shutters: Vec<LabeledPanel>,
    pub lofts: Vec<LabeledPanel>,
    pub col_widths_mm: Vec<f64>,
    pub row_heights_mm: Vec<f64>,
    pub loft_height_mm: f64,
    pub total_width_mm: f64,
    pub total_height_mm: f64,
    pub is_loft_only: bool,
}

impl CadGroup {
    /// Room code plus unit number, e.g. `MB1`.
    pub fn unit_label(&self) -> String {
        format!("{}{}", self.room_code, self.unit_number)
    }

    /// Panels that define the grid: the shutters, or the lofts of a loft-only
    /// unit.
    pub fn grid_panels(&self) -> &[LabeledPanel] {
        if self.is_loft_only {
            &self.lofts
        } else {
            &self.shutters
        }
    }

    /// Whether a loft row sits above the shutter grid.
    pub fn has_loft_row(&self) -> bool {
        !self.is_loft_only && !self.lofts.is_empty()
    }

    pub fn panels(&self) -> impl Iterator<Item = &LabeledPanel> {
        self.shutters.iter().chain(self.lofts.iter())
    }

    pub fn panel_count(&self) -> usize {
        self.shutters.len() + self.lofts.len()
    }
}

/// Column widths, row heights and loft height of one unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct GridDimensions {
    pub col_widths: Vec<f64>,
    pub row_heights: Vec<f64>,
    pub loft_height: f64,
}

impl GridDimensions {
    pub fn width_sum(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    pub fn height_sum(&self) -> f64 {
        self.row_heights.iter().sum()
    }
}

/// Aggregate a unit's grid, reading sizes through `width` and `height` so the
/// same code serves original and overridden dimensions.
pub(crate) fn grid_dimensions<W, H>(
    shutters: &[LabeledPanel],
    lofts: &[LabeledPanel],
    width: W,
    height: H,
) -> GridDimensions
where
    W: Fn(&ProductionPanelItem) -> f64,
    H: Fn(&ProductionPanelItem) -> f64,
{
    let loft_only = shutters.is_empty() && !lofts.is_empty();
    let grid = if loft_only { lofts } else { shutters };

    let mut cols: BTreeMap<usize, f64> = BTreeMap::new();
    let mut rows: BTreeMap<usize, f64> = BTreeMap::new();
    for panel in grid {
        let w = width(&panel.item);
        let h = height(&panel.item);
        cols.entry(panel.item.col)
            .and_modify(|max| *max = max.max(w))
            .or_insert(w);
        rows.entry(panel.item.row)
            .and_modify(|max| *max = max.max(h))
            .or_insert(h);
    }

    let loft_height = if loft_only {
        0.0
    } else {
        lofts
            .iter()
            .map(|p| height(&p.item))
            .fold(0.0, f64::max)
    };

    GridDimensions {
        col_widths: cols.into_values().collect(),
        row_heights: rows.into_values().collect(),
        loft_height,
    }
}

pub fn build_cad_groups(items: &[ProductionPanelItem]) -> Vec<CadGroup> {
    let mut grouped: IndexMap<(usize, &str), Vec<&ProductionPanelItem>> = IndexMap::new();
    for item in items {
        grouped
            .entry((item.room_index, item.unit_id.as_str()))
            .or_default()
            .push(item);
    }

    let mut units_per_room: HashMap<usize, usize> = HashMap::new();
    let groups: Vec<CadGroup> = grouped
        .into_iter()
        .map(|((room_index, unit_id), panels)| {
            let counter = units_per_room.entry(room_index).or_insert(0);
            *counter += 1;
            build_group(room_index, unit_id, *counter, &panels)
        })
        .collect();

    tracing::debug!(
        panels = items.len(),
        groups = groups.len(),
        "built CAD groups"
    );
    groups
}

fn build_group(
    room_index: usize,
    unit_id: &str,
    unit_number: usize,
    panels: &[&ProductionPanelItem],
) -> CadGroup {
    // Grouping guarantees at least one panel.
    let first = panels[0];
    let room_code = room_code(&first.room_name);

    let label = |kind: &str, n: usize| format!("{}{}-{}{}", room_code, unit_number, kind, n);
    let mut shutters = Vec::new();
    let mut lofts = Vec::new();
    for item in panels {
        match item.panel_type {
            PanelType::Shutter => shutters.push(LabeledPanel {
                label: label("S", shutters.len() + 1),
                item: (*item).clone(),
            }),
            PanelType::Loft => lofts.push(LabeledPanel {
                label: label("L", lofts.len() + 1),
                item: (*item).clone(),
            }),
        }
    }

    let dims = grid_dimensions(&shutters, &lofts, |p| p.width_mm, |p| p.height_mm);
    let is_loft_only = shutters.is_empty() && !lofts.is_empty();

    CadGroup {
        room_index,
        room_name: first.room_name.clone(),
        unit_id: unit_id.to_string(),
        unit_name: first.unit_name.clone(),
        unit_code: unit_code(&first.unit_name),
        unit_number,
        total_width_mm: dims.width_sum(),
        total_height_mm: dims.height_sum() + dims.loft_height,
        col_widths_mm: dims.col_widths,
        row_heights_mm: dims.row_heights,
        loft_height_mm: dims.loft_height,
        shutters,
        lofts,
        is_loft_only,
        room_code,
    }
}
