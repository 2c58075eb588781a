//! Section width solver.
//!
//! Splits the inner width of a carcass into sections separated by center
//! posts. Input is auto-corrected rather than rejected: missing or NaN values
//! fall back to defaults and out-of-range values clamp to the nearest bound,
//! so the solver always produces a usable layout.

use serde::{Deserialize, Serialize};
use wardrobekit_core::units::{round_to, sanitize};

pub const DEFAULT_WIDTH_MM: f64 = 1200.0;
pub const MIN_WIDTH_MM: f64 = 200.0;
pub const MAX_WIDTH_MM: f64 = 6000.0;

pub const DEFAULT_THICKNESS_MM: f64 = 18.0;
pub const MIN_THICKNESS_MM: f64 = 8.0;
pub const MAX_THICKNESS_MM: f64 = 50.0;

pub const DEFAULT_POST_COUNT: usize = 0;
pub const MAX_POST_COUNT: usize = 10;

/// Inner width never drops below this, however thick the panels.
pub const MIN_INNER_WIDTH_MM: f64 = 100.0;
/// Narrowest section the solver will emit.
pub const MIN_SECTION_WIDTH_MM: f64 = 50.0;
/// Section widths are reported to this precision.
pub const SECTION_WIDTH_STEP_MM: f64 = 0.1;

/// Solver input. Every field is optional; see the module docs for fallbacks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionWidthParams {
    #[serde(default)]
    pub width_mm: Option<f64>,
    #[serde(default)]
    pub carcass_thickness_mm: Option<f64>,
    #[serde(default)]
    pub center_post_count: Option<i64>,
    /// Post left edges in inner coordinates (0 = inner face of the left panel).
    #[serde(default)]
    pub custom_post_positions: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub inner_width: f64,
    pub section_widths: Vec<f64>,
    pub post_positions: Vec<f64>,
}

impl SectionLayout {
    pub fn section_count(&self) -> usize {
        self.section_widths.len()
    }
}

/// Clamp the carcass width.
pub fn sanitize_width(width_mm: Option<f64>) -> f64 {
    sanitize(width_mm, MIN_WIDTH_MM, MAX_WIDTH_MM, DEFAULT_WIDTH_MM)
}

/// Clamp the panel thickness.
pub fn sanitize_thickness(thickness_mm: Option<f64>) -> f64 {
    sanitize(
        thickness_mm,
        MIN_THICKNESS_MM,
        MAX_THICKNESS_MM,
        DEFAULT_THICKNESS_MM,
    )
}

/// Clamp the center post count.
pub fn sanitize_post_count(count: Option<i64>) -> usize {
    match count {
        Some(n) => n.clamp(0, MAX_POST_COUNT as i64) as usize,
        None => DEFAULT_POST_COUNT,
    }
}

/// Width between the inner faces of the left and right panels.
pub fn inner_width(width_mm: f64, thickness_mm: f64) -> f64 {
    (width_mm - 2.0 * thickness_mm).max(MIN_INNER_WIDTH_MM)
}

pub fn calculate_section_widths(params: &SectionWidthParams) -> SectionLayout {
    let width = sanitize_width(params.width_mm);
    let thickness = sanitize_thickness(params.carcass_thickness_mm);
    let post_count = sanitize_post_count(params.center_post_count);
    let inner = inner_width(width, thickness);

    if post_count == 0 {
        return SectionLayout {
            inner_width: inner,
            section_widths: vec![inner],
            post_positions: Vec::new(),
        };
    }

    if let Some(custom) = params.custom_post_positions.as_deref() {
        if custom.len() == post_count {
            if let Some(layout) = custom_layout(custom, inner, thickness, post_count) {
                return layout;
            }
        }
        tracing::trace!(
            requested = custom.len(),
            post_count,
            "custom post positions rejected, using equal division"
        );
    }

    equal_layout(inner, thickness, post_count)
}

fn custom_layout(
    custom: &[f64],
    inner: f64,
    thickness: f64,
    post_count: usize,
) -> Option<SectionLayout> {
    let mut positions: Vec<f64> = custom
        .iter()
        .copied()
        .filter(|p| *p > 0.0 && *p < inner)
        .collect();
    if positions.len() != post_count {
        return None;
    }
    positions.sort_by(f64::total_cmp);

    let mut section_widths = Vec::with_capacity(post_count + 1);
    let mut start = 0.0;
    for &p in &positions {
        section_widths.push(section_width(p - start));
        start = p + thickness;
    }
    section_widths.push(section_width(inner - start));

    Some(SectionLayout {
        inner_width: inner,
        section_widths,
        post_positions: positions,
    })
}

fn equal_layout(inner: f64, thickness: f64, post_count: usize) -> SectionLayout {
    let n = post_count as f64;
    let equal = ((inner - n * thickness) / (n + 1.0)).max(MIN_SECTION_WIDTH_MM);

    let post_positions = (1..=post_count)
        .map(|i| equal * i as f64 + thickness * (i as f64 - 1.0))
        .collect();

    SectionLayout {
        inner_width: inner,
        section_widths: vec![round_to(equal, SECTION_WIDTH_STEP_MM); post_count + 1],
        post_positions,
    }
}

fn section_width(gap: f64) -> f64 {
    round_to(gap.max(MIN_SECTION_WIDTH_MM), SECTION_WIDTH_STEP_MM)
}
