//! # DovetailKit Core
//!
//! Shared types and utilities used across the DovetailKit crates.
//! Currently this is the measurement system label and the fixed-point
//! number formatting used when presenting layout results.

pub mod units;

pub use units::{format_fixed, format_length, get_unit_label, MeasurementSystem};
