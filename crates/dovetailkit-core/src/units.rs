//! Unit labels and display formatting
//!
//! Layout values are unit-agnostic: whatever unit the user types in is the
//! unit the results are reported in. The measurement system only selects the
//! label shown next to a value, no conversion is ever applied.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl Default for MeasurementSystem {
    fn default() -> Self {
        Self::Metric
    }
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
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

/// Format a number with a fixed count of decimals.
///
/// Exact midpoints round away from zero (`0.25` -> `"0.3"`, `-0.25` -> `"-0.3"`)
/// rather than to even, and a negative zero input prints as `"0.0"`.
/// Non-finite values print as their plain `Display` form.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value);
    if !is_rounding_tie(value, decimals) {
        return formatted;
    }

    // std may have rounded the midpoint towards zero; step one unit outwards
    let rounded = formatted.parse::<f64>().unwrap_or(value);
    if rounded.abs() < value.abs() {
        let step = 10f64.powi(-(decimals as i32));
        format!("{:.*}", decimals, rounded + step.copysign(value))
    } else {
        formatted
    }
}

/// True when `value` sits exactly halfway between two representable results
/// at `decimals` places, i.e. `value * 2^(decimals + 1)` is an odd integer.
fn is_rounding_tie(value: f64, decimals: usize) -> bool {
    let scaled = value * 2f64.powi(decimals as i32 + 1);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 != 0.0
}

/// Format a length for display together with its unit label
///
/// * `value` - Value in the user's unit
/// * `system` - Measurement system providing the label
/// * `decimals` - Number of decimal places
pub fn format_length(value: f64, system: MeasurementSystem, decimals: usize) -> String {
    format!("{} {}", format_fixed(value, decimals), get_unit_label(system))
}
