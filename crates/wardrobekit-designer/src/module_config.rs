//! Wardrobe module configuration.
//!
//! Owned and edited by the design UI. The engine reads it and hands back new
//! values (updated sections, post positions) but never edits it in place.

use serde::{Deserialize, Serialize};
use wardrobekit_core::{Error, Result};

use crate::classify::PanelKind;
use crate::sections::{
    calculate_section_widths, sanitize_post_count, sanitize_thickness, SectionLayout,
    SectionWidthParams, MAX_POST_COUNT, MAX_THICKNESS_MM, MAX_WIDTH_MM, MIN_THICKNESS_MM,
    MIN_WIDTH_MM,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    #[default]
    Hanging,
    Shelves,
    Drawers,
    Open,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub section_type: SectionType,
    #[serde(default)]
    pub shelf_count: u32,
    /// Shelf y-positions measured down from the inner face of the top panel.
    #[serde(default)]
    pub custom_shelf_positions: Option<Vec<f64>>,
    /// Partial-height dividers hung below the lowest shelf.
    #[serde(default)]
    pub posts_below: u32,
}

impl Section {
    pub fn new(section_type: SectionType, shelf_count: u32) -> Self {
        Self {
            section_type,
            shelf_count,
            ..Default::default()
        }
    }
}

/// Which structural panels are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelToggles {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub back: bool,
}

impl Default for PanelToggles {
    fn default() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            back: true,
        }
    }
}

impl PanelToggles {
    pub fn is_enabled(&self, kind: PanelKind) -> bool {
        match kind {
            PanelKind::Top => self.top,
            PanelKind::Bottom => self.bottom,
            PanelKind::Left => self.left,
            PanelKind::Right => self.right,
            PanelKind::Back => self.back,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub carcass_thickness_mm: f64,
    #[serde(default)]
    pub panels: PanelToggles,
    #[serde(default)]
    pub center_post_count: u32,
    /// Post left edges in inner coordinates, if the user has dragged posts.
    #[serde(default)]
    pub custom_post_positions: Option<Vec<f64>>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            width_mm: 1200.0,
            height_mm: 2100.0,
            depth_mm: 560.0,
            carcass_thickness_mm: 18.0,
            panels: PanelToggles::default(),
            center_post_count: 0,
            custom_post_positions: None,
            sections: vec![Section::default()],
        }
    }
}

impl ModuleConfig {
    /// Panel thickness after clamping to the supported range.
    pub fn thickness(&self) -> f64 {
        sanitize_thickness(Some(self.carcass_thickness_mm))
    }

    /// Post count after clamping to the supported range.
    pub fn post_count(&self) -> usize {
        sanitize_post_count(Some(i64::from(self.center_post_count)))
    }

    pub fn section_width_params(&self) -> SectionWidthParams {
        SectionWidthParams {
            width_mm: Some(self.width_mm),
            carcass_thickness_mm: Some(self.carcass_thickness_mm),
            center_post_count: Some(i64::from(self.center_post_count)),
            custom_post_positions: self.custom_post_positions.clone(),
        }
    }

    pub fn section_layout(&self) -> SectionLayout {
        calculate_section_widths(&self.section_width_params())
    }

    /// Strict check for programmatic edits.
    ///
    /// The geometry functions clamp bad values silently; this reports them.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH_MM..=MAX_WIDTH_MM).contains(&self.width_mm) {
            return Err(Error::invalid_config(
                "width_mm",
                format!("must be between {} and {}", MIN_WIDTH_MM, MAX_WIDTH_MM),
            ));
        }
        if !(self.height_mm.is_finite() && self.height_mm > 0.0) {
            return Err(Error::invalid_config("height_mm", "must be > 0"));
        }
        if !(self.depth_mm.is_finite() && self.depth_mm > 0.0) {
            return Err(Error::invalid_config("depth_mm", "must be > 0"));
        }
        if !(MIN_THICKNESS_MM..=MAX_THICKNESS_MM).contains(&self.carcass_thickness_mm) {
            return Err(Error::invalid_config(
                "carcass_thickness_mm",
                format!(
                    "must be between {} and {}",
                    MIN_THICKNESS_MM, MAX_THICKNESS_MM
                ),
            ));
        }
        if self.center_post_count as usize > MAX_POST_COUNT {
            return Err(Error::invalid_config(
                "center_post_count",
                format!("must be at most {}", MAX_POST_COUNT),
            ));
        }
        if let Some(positions) = &self.custom_post_positions {
            if positions.len() != self.center_post_count as usize {
                return Err(Error::invalid_config(
                    "custom_post_positions",
                    "count must match center_post_count",
                ));
            }
        }
        Ok(())
    }

    /// Sections padded with defaults or truncated so there is exactly one per
    /// gap between posts.
    pub fn normalized_sections(&self) -> Vec<Section> {
        let count = self.post_count() + 1;
        let mut sections = self.sections.clone();
        sections.resize_with(count, Section::default);
        sections
    }
}
