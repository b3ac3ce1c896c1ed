//! Type definitions for the Dovetail Layout Calculator

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six measurements a layout is computed from.
///
/// Lengths share whatever unit the user works in; nothing is converted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    /// Total length of the board edge being laid out
    pub length: f64,
    /// Joint depth, i.e. the thickness of the opposite stock
    pub depth: f64,
    /// Pin width at its base
    pub pin: f64,
    /// Margin kept free at the left end
    pub left_offset: f64,
    /// Margin kept free at the right end
    pub right_offset: f64,
    /// Tail slope given as the `x` in a `1:x` ratio
    pub slope: f64,
}

impl LayoutInput {
    /// Every field paired with its name, in form order.
    pub fn fields(&self) -> [(LayoutField, f64); 6] {
        [
            (LayoutField::Length, self.length),
            (LayoutField::Depth, self.depth),
            (LayoutField::Pin, self.pin),
            (LayoutField::LeftOffset, self.left_offset),
            (LayoutField::RightOffset, self.right_offset),
            (LayoutField::Slope, self.slope),
        ]
    }
}

/// Names of the layout inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutField {
    Length,
    Depth,
    Pin,
    LeftOffset,
    RightOffset,
    Slope,
}

impl LayoutField {
    /// All fields in form order
    pub const ALL: [LayoutField; 6] = [
        LayoutField::Length,
        LayoutField::Depth,
        LayoutField::Pin,
        LayoutField::LeftOffset,
        LayoutField::RightOffset,
        LayoutField::Slope,
    ];

    /// Human readable label, `unit` is inserted where the field is a length
    pub fn label(&self, unit: &str) -> String {
        match self {
            Self::Length => format!("Total length (in {})", unit),
            Self::Depth => format!("Depth (opposite stock thickness in {})", unit),
            Self::Pin => format!("Pin width at base (in {})", unit),
            Self::LeftOffset => format!("Offset left (in {})", unit),
            Self::RightOffset => format!("Offset right (in {})", unit),
            Self::Slope => "Tail slope (1:x)".to_string(),
        }
    }
}

impl fmt::Display for LayoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Depth => write!(f, "depth"),
            Self::Pin => write!(f, "pin"),
            Self::LeftOffset => write!(f, "left offset"),
            Self::RightOffset => write!(f, "right offset"),
            Self::Slope => write!(f, "slope"),
        }
    }
}

/// One feasible way to lay out the joint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutVariant {
    /// Number of tails
    pub tail_count: usize,
    /// Tail width at its narrow end
    pub tail_width: f64,
    /// Pin width at its narrow end
    pub pin_at_tip_width: f64,
    /// Cut marks measured from the left edge, ascending
    pub stops: Vec<f64>,
}

/// Raw text of the six input fields, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutForm {
    pub length: String,
    pub depth: String,
    pub pin: String,
    pub left_offset: String,
    pub right_offset: String,
    pub slope: String,
}

impl Default for LayoutForm {
    fn default() -> Self {
        Self {
            length: String::new(),
            depth: "18".to_string(),
            pin: "19".to_string(),
            left_offset: "10".to_string(),
            right_offset: "10".to_string(),
            slope: "6".to_string(),
        }
    }
}

impl LayoutForm {
    /// Text currently held by `field`
    pub fn get(&self, field: LayoutField) -> &str {
        match field {
            LayoutField::Length => &self.length,
            LayoutField::Depth => &self.depth,
            LayoutField::Pin => &self.pin,
            LayoutField::LeftOffset => &self.left_offset,
            LayoutField::RightOffset => &self.right_offset,
            LayoutField::Slope => &self.slope,
        }
    }

    /// Replace the text held by `field`
    pub fn set(&mut self, field: LayoutField, text: impl Into<String>) {
        let text = text.into();
        match field {
            LayoutField::Length => self.length = text,
            LayoutField::Depth => self.depth = text,
            LayoutField::Pin => self.pin = text,
            LayoutField::LeftOffset => self.left_offset = text,
            LayoutField::RightOffset => self.right_offset = text,
            LayoutField::Slope => self.slope = text,
        }
    }

    /// Parse every field. Unparseable text becomes NaN, which the
    /// calculator rejects as an invalid number.
    pub fn to_input(&self) -> LayoutInput {
        LayoutInput {
            length: parse_field(&self.length),
            depth: parse_field(&self.depth),
            pin: parse_field(&self.pin),
            left_offset: parse_field(&self.left_offset),
            right_offset: parse_field(&self.right_offset),
            slope: parse_field(&self.slope),
        }
    }
}

/// Parse one field of user text, NaN when empty or not a number
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
