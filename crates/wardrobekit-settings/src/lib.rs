//! WardrobeKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, CarcassDefaults, Config, MeasurementSystem, ProductionSettings};
pub use error::{SettingsError, SettingsResult};
