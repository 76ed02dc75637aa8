//! Demo scoring constants.
//!
//! A real implementation would source the reference mean and standard
//! deviation from population statistics; this pipeline intentionally uses
//! fixed demo values.

pub const PGS_ID: &str = "PGS000000-demo";
pub const PGS_NOTE: &str = "relative only";

pub const REFERENCE_MEAN: f64 = 0.0;
pub const REFERENCE_SD: f64 = 1.0;
