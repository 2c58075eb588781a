//! Override-aware unit layout and gap/total redistribution.
//!
//! None of these functions mutate their inputs. Redistribution returns the new
//! override entries for the caller to fold into its map with
//! [`PanelOverrides::apply`]. Values are rounded to whole millimetres only when
//! emitted, so repeated edits do not compound rounding error.

use std::fmt;

use serde::{Deserialize, Serialize};
use wardrobekit_core::round_mm;

use crate::cad_group::{grid_dimensions, CadGroup, GridDimensions, LabeledPanel};
use crate::overrides::{PanelOverride, PanelOverrides};

/// A unit's grid as it currently displays, gaps included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLayout {
    pub gap_mm: f64,
    pub col_widths_mm: Vec<f64>,
    pub row_heights_mm: Vec<f64>,
    pub loft_height_mm: f64,
    pub total_width_mm: f64,
    pub total_height_mm: f64,
}

impl GroupLayout {
    pub fn col_count(&self) -> usize {
        self.col_widths_mm.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_heights_mm.len()
    }
}

/// Which total the user edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionField {
    Width,
    Height,
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Total span of `count` cells laid out with `gap` between neighbours.
fn span(sum: f64, count: usize, gap: f64) -> f64 {
    sum + count.saturating_sub(1) as f64 * gap
}

/// Cell size that makes `count` cells plus their gaps fill `total`.
fn cell_size(total: f64, count: usize, gap: f64) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let size = (total - count.saturating_sub(1) as f64 * gap) / count as f64;
    (size.is_finite() && size > 0.0).then_some(size)
}

fn effective_grid(group: &CadGroup, overrides: &PanelOverrides) -> GridDimensions {
    grid_dimensions(
        &group.shutters,
        &group.lofts,
        |p| overrides.width_for(p),
        |p| overrides.height_for(p),
    )
}

pub fn calculate_group_layout(
    group: &CadGroup,
    gap_mm: f64,
    overrides: &PanelOverrides,
) -> GroupLayout {
    let gap = if gap_mm.is_finite() { gap_mm.max(0.0) } else { 0.0 };
    let dims = effective_grid(group, overrides);

    let total_width = span(dims.width_sum(), dims.col_widths.len(), gap);
    let mut total_height = span(dims.height_sum(), dims.row_heights.len(), gap);
    if group.has_loft_row() {
        total_height += dims.loft_height + gap;
    }

    GroupLayout {
        gap_mm: gap,
        col_widths_mm: dims.col_widths,
        row_heights_mm: dims.row_heights,
        loft_height_mm: dims.loft_height,
        total_width_mm: total_width,
        total_height_mm: total_height,
    }
}

/// Hold the unit's footprint fixed while the gap changes.
///
/// Every column receives the same new width and every row the same new
/// height, even when they differed before. One override is emitted per grid
/// panel.
pub fn calculate_gap_adjusted_dimensions(
    group: &CadGroup,
    old_gap_mm: f64,
    new_gap_mm: f64,
    overrides: &PanelOverrides,
) -> PanelOverrides {
    if !valid_gap(old_gap_mm) || !valid_gap(new_gap_mm) {
        tracing::debug!(old_gap_mm, new_gap_mm, "gap change ignored: invalid gap");
        return PanelOverrides::new();
    }

    let dims = effective_grid(group, overrides);
    let cols = dims.col_widths.len();
    let rows = dims.row_heights.len();
    let total_width = span(dims.width_sum(), cols, old_gap_mm);
    let total_height = span(dims.height_sum(), rows, old_gap_mm);

    let (Some(width), Some(height)) = (
        cell_size(total_width, cols, new_gap_mm),
        cell_size(total_height, rows, new_gap_mm),
    ) else {
        tracing::debug!(
            unit = %group.unit_label(),
            new_gap_mm,
            "gap change ignored: no room left for panels"
        );
        return PanelOverrides::new();
    };

    emit(
        group.grid_panels(),
        overrides,
        PanelOverride::with_size(round_mm(width), round_mm(height)),
    )
}

/// Redistribute a user-entered total across the unit's columns or rows.
///
/// A new width applies to shutters and lofts alike. A new height applies to
/// the grid rows only; the loft row keeps its height.
pub fn calculate_overall_dimension_change(
    group: &CadGroup,
    field: DimensionField,
    new_value_mm: f64,
    gap_mm: f64,
    overrides: &PanelOverrides,
) -> PanelOverrides {
    if !new_value_mm.is_finite() || new_value_mm <= 0.0 || !valid_gap(gap_mm) {
        tracing::debug!(%field, new_value_mm, gap_mm, "dimension change ignored: invalid value");
        return PanelOverrides::new();
    }

    let dims = effective_grid(group, overrides);
    match field {
        DimensionField::Width => {
            let Some(width) = cell_size(new_value_mm, dims.col_widths.len(), gap_mm) else {
                tracing::debug!(unit = %group.unit_label(), new_value_mm, "width change ignored");
                return PanelOverrides::new();
            };
            let value = PanelOverride::with_width(round_mm(width));
            let mut out = emit(&group.shutters, overrides, value);
            out.apply(&emit(&group.lofts, overrides, value));
            out
        }
        DimensionField::Height => {
            let available = if group.has_loft_row() {
                new_value_mm - dims.loft_height - gap_mm
            } else {
                new_value_mm
            };
            let Some(height) = cell_size(available, dims.row_heights.len(), gap_mm) else {
                tracing::debug!(unit = %group.unit_label(), new_value_mm, "height change ignored");
                return PanelOverrides::new();
            };
            emit(
                group.grid_panels(),
                overrides,
                PanelOverride::with_height(round_mm(height)),
            )
        }
    }
}

fn valid_gap(gap: f64) -> bool {
    gap.is_finite() && gap >= 0.0
}

/// One entry per panel: its existing override with `value` folded in.
fn emit(panels: &[LabeledPanel], overrides: &PanelOverrides, value: PanelOverride) -> PanelOverrides {
    panels
        .iter()
        .map(|p| {
            let existing = overrides.get(&p.item.id).copied().unwrap_or_default();
            (p.item.id.clone(), existing.merged(value))
        })
        .collect()
}
