//! Layout Report
//!
//! Immutable record of one calculation: what was asked, in which unit, and
//! what came out. Front ends hold on to the latest report instead of keeping
//! their own mutable result state.

use crate::dovetail_layout::{DovetailLayoutCalculator, LayoutInput, LayoutVariant};
use crate::error::{CamToolResult, LayoutError};
use dovetailkit_core::MeasurementSystem;
use serde::Serialize;

/// Result of a layout calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutOutcome {
    /// Variants in increasing tail count order
    Variants(Vec<LayoutVariant>),
    /// Input rejected
    Error(ErrorReport),
}

/// Serializable view of a [`LayoutError`] including its user message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    #[serde(flatten)]
    pub error: LayoutError,
    pub message: String,
}

impl From<LayoutError> for ErrorReport {
    fn from(error: LayoutError) -> Self {
        let message = error.to_string();
        Self { error, message }
    }
}

/// Everything a front end needs to present one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub input: LayoutInput,
    pub unit: MeasurementSystem,
    pub outcome: LayoutOutcome,
}

impl LayoutReport {
    /// Run the calculator on `input` and capture the outcome
    pub fn new(input: LayoutInput, unit: MeasurementSystem) -> Self {
        let outcome = match DovetailLayoutCalculator::compute(&input) {
            Ok(variants) => LayoutOutcome::Variants(variants),
            Err(err) => LayoutOutcome::Error(err.into()),
        };

        Self {
            input,
            unit,
            outcome,
        }
    }

    pub fn variants(&self) -> Option<&[LayoutVariant]> {
        match &self.outcome {
            LayoutOutcome::Variants(variants) => Some(variants.as_slice()),
            LayoutOutcome::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LayoutError> {
        match &self.outcome {
            LayoutOutcome::Variants(_) => None,
            LayoutOutcome::Error(report) => Some(&report.error),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> CamToolResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
