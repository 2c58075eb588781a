//! # WardrobeKit
//!
//! Geometry and production layout engine behind a visual wardrobe quotation
//! tool:
//! - Carcass section, shelf and post geometry with legal drag bounds
//! - Shape classification and hit testing for the 2D design canvas
//! - Per-unit production grids with gap-aware dimension redistribution
//!
//! ## Architecture
//!
//! 1. **wardrobekit-core** - Error type, millimetre units and rounding
//! 2. **wardrobekit-designer** - Canvas shapes, section solver, bounds, hit testing
//! 3. **wardrobekit-production** - CAD groups, layout redistribution, cut lists
//! 4. **wardrobekit-settings** - JSON/TOML configuration
//! 5. **wardrobekit** - Re-exports and logging setup

pub use wardrobekit_designer as designer;
pub use wardrobekit_production as production;
pub use wardrobekit_settings as settings;

pub use wardrobekit_core::{format_length, Error, MeasurementSystem, Result};

pub use wardrobekit_designer::{
    calculate_section_widths, CanvasSnapshot, ModuleConfig, Section, SectionType, Shape, ShapeId,
};

pub use wardrobekit_production::{
    build_cad_groups, calculate_gap_adjusted_dimensions, calculate_group_layout,
    calculate_overall_dimension_change, cut_list, CadGroup, DimensionField, PanelOverrides,
    ProductionPanelItem,
};

pub use wardrobekit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG`, falling back to `info`. Returns an error instead of
/// panicking when a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            registry.with(fmt_layer).try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            registry.with(fmt_layer).try_init()?;
        }
    }

    tracing::debug!(version = VERSION, ?format, "logging initialized");
    Ok(())
}
