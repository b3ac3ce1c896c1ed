//! Error types for the CAM tools crate.
//!
//! Layout validation failures are ordinary user-input problems, each with a
//! fixed message meant to be shown as-is. Everything else that can go wrong
//! while producing output is wrapped in [`CamToolError`].

use crate::dovetail_layout::LayoutField;
use serde::Serialize;
use thiserror::Error;

/// Reasons a dovetail layout cannot be computed.
///
/// The display text of each variant is the exact message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum LayoutError {
    /// One of the inputs is empty, non-numeric or not finite.
    #[error("All fields must contain valid numbers.")]
    InvalidNumber {
        /// First field that failed to parse.
        field: LayoutField,
    },

    /// The left or right offset is below zero.
    #[error("Left and right offset has to be at least 0.")]
    NegativeOffset,

    /// The pin would have a negative width at its tip.
    #[error("Pin too narrow. It must be at least {min_pin}.")]
    PinTooNarrow {
        /// Smallest pin width that keeps the tip at zero or more.
        min_pin: f64,
    },

    /// Not even one tail fits between the offsets.
    #[error("Length is too short. Adjust left and right offsets.")]
    LengthTooShort {
        /// Span left over for tails after the offsets were removed.
        tail_span: f64,
    },
}

impl LayoutError {
    /// Stable name of the error kind, as used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidNumber { .. } => "InvalidNumber",
            Self::NegativeOffset => "NegativeOffset",
            Self::PinTooNarrow { .. } => "PinTooNarrow",
            Self::LengthTooShort { .. } => "LengthTooShort",
        }
    }
}

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The layout inputs were rejected.
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for layout computation.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;
