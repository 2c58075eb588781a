//! # WardrobeKit Core
//!
//! Shared building blocks for the WardrobeKit crates: the unified error type
//! used at fallible boundaries (configuration I/O) and the millimetre unit
//! helpers used by the geometry and production engines.

pub mod error;
pub mod units;

pub use error::{Error, Result};
pub use units::{
    format_length, round_mm, round_to, sanitize, MeasurementSystem, MM_PER_INCH,
};
