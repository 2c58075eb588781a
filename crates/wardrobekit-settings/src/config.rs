//! Configuration for WardrobeKit
//!
//! Settings are grouped into sections:
//! - Canvas interaction (grid, snapping, edge grab threshold)
//! - Production layout (panel gap)
//! - Carcass defaults for newly drawn units
//!
//! Files are JSON or TOML, chosen by extension.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
pub use wardrobekit_core::MeasurementSystem;
use wardrobekit_designer::geometry::{snap_point, snap_to_grid, Point};
use wardrobekit_designer::ModuleConfig;

use crate::error::{SettingsError, SettingsResult};

/// Canvas interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Grid pitch; also scales the line hit tolerance
    pub grid_size_mm: f64,
    /// Distance from a panel edge that starts a resize instead of a move
    pub edge_threshold_px: f64,
    pub snap_to_grid: bool,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            grid_size_mm: 10.0,
            edge_threshold_px: 6.0,
            snap_to_grid: true,
        }
    }
}

impl CanvasSettings {
    /// Snap a coordinate when snapping is on.
    pub fn snap(&self, value: f64) -> f64 {
        if self.snap_to_grid {
            snap_to_grid(value, self.grid_size_mm)
        } else {
            value
        }
    }

    pub fn snap_point(&self, point: Point) -> Point {
        if self.snap_to_grid {
            snap_point(point, self.grid_size_mm)
        } else {
            point
        }
    }
}

/// Production layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionSettings {
    /// Gap between adjacent panels in a unit layout
    pub gap_mm: f64,
}

impl Default for ProductionSettings {
    fn default() -> Self {
        Self { gap_mm: 2.0 }
    }
}

/// Carcass dimensions for newly drawn units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarcassDefaults {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
    pub carcass_thickness_mm: f64,
}

impl Default for CarcassDefaults {
    fn default() -> Self {
        Self {
            width_mm: 1200.0,
            height_mm: 2100.0,
            depth_mm: 560.0,
            carcass_thickness_mm: 18.0,
        }
    }
}

impl CarcassDefaults {
    pub fn to_module_config(&self) -> ModuleConfig {
        ModuleConfig {
            width_mm: self.width_mm,
            height_mm: self.height_mm,
            depth_mm: self.depth_mm,
            carcass_thickness_mm: self.carcass_thickness_mm,
            ..ModuleConfig::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub measurement_system: MeasurementSystem,
    pub canvas: CanvasSettings,
    pub production: ProductionSettings,
    pub carcass: CarcassDefaults,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/wardrobekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("wardrobekit").join("config.toml"))
            .ok_or_else(|| SettingsError::Load("no platform config directory".to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Load(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from `path`, or defaults when the file does not exist yet.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::Save(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if !is_positive(self.canvas.grid_size_mm) {
            return Err(SettingsError::invalid("canvas.grid_size_mm", "must be > 0"));
        }

        if !is_non_negative(self.canvas.edge_threshold_px) {
            return Err(SettingsError::invalid(
                "canvas.edge_threshold_px",
                "must be >= 0",
            ));
        }

        if !is_non_negative(self.production.gap_mm) {
            return Err(SettingsError::invalid("production.gap_mm", "must be >= 0"));
        }

        let carcass = [
            ("carcass.width_mm", self.carcass.width_mm),
            ("carcass.height_mm", self.carcass.height_mm),
            ("carcass.depth_mm", self.carcass.depth_mm),
            (
                "carcass.carcass_thickness_mm",
                self.carcass.carcass_thickness_mm,
            ),
        ];
        for (key, value) in carcass {
            if !is_positive(value) {
                return Err(SettingsError::invalid(key, "must be > 0"));
            }
        }

        self.carcass
            .to_module_config()
            .validate()
            .map_err(|e| match SettingsError::from(e) {
                SettingsError::InvalidSetting { key, reason } => {
                    SettingsError::invalid(format!("carcass.{}", key), reason)
                }
                other => other,
            })?;

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
