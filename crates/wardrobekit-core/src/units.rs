//! Unit helpers
//!
//! All engine geometry is expressed in millimetres. These helpers cover the
//! rounding and input-sanitising rules shared by the designer and production
//! crates, plus display formatting for metric or imperial users.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Format a millimetre length for display.
///
/// Metric lengths print as whole millimetres, imperial lengths as inches with
/// two decimals.
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.0} mm", value_mm),
        MeasurementSystem::Imperial => format!("{:.2} in", value_mm / MM_PER_INCH),
    }
}

/// Round to the nearest whole millimetre.
pub fn round_mm(value: f64) -> f64 {
    value.round()
}

/// Round to the nearest multiple of `step`. A non-positive step returns the
/// value unchanged.
pub fn round_to(value: f64, step: f64) -> f64 {
    if step <= 0.0 || !step.is_finite() {
        return value;
    }
    let inv = 1.0 / step;
    (value * inv).round() / inv
}

/// Replace a missing or NaN value with `default`, then clamp into `[min, max]`.
///
/// Out-of-range input is corrected rather than rejected.
pub fn sanitize(value: Option<f64>, min: f64, max: f64, default: f64) -> f64 {
    match value {
        Some(v) if !v.is_nan() => {
            let clamped = v.clamp(min, max);
            if clamped != v {
                tracing::trace!(value = v, clamped, "value clamped into range");
            }
            clamped
        }
        _ => {
            tracing::trace!(default, "missing value replaced by default");
            default
        }
    }
}
