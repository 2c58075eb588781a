//! Manual dimension corrections keyed by panel id.
//!
//! Wherever a panel's size is shown or exported, an override field beats the
//! computed value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::panel::ProductionPanelItem;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl PanelOverride {
    pub fn with_width(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    pub fn with_height(height: f64) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Fields set in `other` replace ours.
    pub fn merged(self, other: PanelOverride) -> Self {
        Self {
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelOverrides(BTreeMap<String, PanelOverride>);

impl PanelOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, panel_id: &str) -> Option<&PanelOverride> {
        self.0.get(panel_id)
    }

    pub fn insert(&mut self, panel_id: impl Into<String>, value: PanelOverride) {
        self.0.insert(panel_id.into(), value);
    }

    pub fn remove(&mut self, panel_id: &str) -> Option<PanelOverride> {
        self.0.remove(panel_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PanelOverride)> {
        self.0.iter()
    }

    /// Width to display or cut: the override if present, else the original.
    pub fn width_for(&self, item: &ProductionPanelItem) -> f64 {
        self.get(&item.id)
            .and_then(|o| o.width)
            .unwrap_or(item.width_mm)
    }

    /// Height to display or cut: the override if present, else the original.
    pub fn height_for(&self, item: &ProductionPanelItem) -> f64 {
        self.get(&item.id)
            .and_then(|o| o.height)
            .unwrap_or(item.height_mm)
    }

    /// Fold `updates` into this map field by field.
    pub fn apply(&mut self, updates: &PanelOverrides) {
        for (id, update) in updates.iter() {
            let merged = self.get(id).copied().unwrap_or_default().merged(*update);
            self.0.insert(id.clone(), merged);
        }
    }

    /// Copy of this map with `updates` applied.
    pub fn merged(&self, updates: &PanelOverrides) -> Self {
        let mut out = self.clone();
        out.apply(updates);
        out
    }
}

impl FromIterator<(String, PanelOverride)> for PanelOverrides {
    fn from_iter<I: IntoIterator<Item = (String, PanelOverride)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
