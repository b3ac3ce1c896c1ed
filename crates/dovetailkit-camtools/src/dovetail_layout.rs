//! Dovetail Layout Calculator
//!
//! Works out how many tails can be cut along a board edge and where to mark
//! the cuts for each choice. The usable span between the two offsets, plus
//! one pin-tip width, is split into `count` equal pitches; each pitch boundary
//! is marked from both ends so the layout stays symmetric.
//!
//! The largest tail count considered keeps at least [`MIN_TAIL_BASE_WIDTH`]
//! of material at the narrow base of each tail.

mod types;

pub use types::{parse_field, LayoutField, LayoutForm, LayoutInput, LayoutVariant};

use crate::error::{LayoutError, LayoutResult};
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Narrowest width allowed at the base of a tail
pub const MIN_TAIL_BASE_WIDTH: f64 = 3.0;

/// Upper bound on the tail counts enumerated for a single board
pub const MAX_TAIL_COUNT: usize = 1_000;

/// Validated layout inputs together with the derived joint geometry
#[derive(Debug, Clone)]
pub struct DovetailLayoutCalculator {
    input: LayoutInput,
    pin_at_tip_width: f64,
    tail_span: f64,
    max_count: f64,
}

impl DovetailLayoutCalculator {
    /// Validate `input` and derive the joint geometry.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn new(input: LayoutInput) -> LayoutResult<Self> {
        if let Some((field, _)) = input.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            debug!(%field, "Layout input is not a finite number");
            return Err(LayoutError::InvalidNumber { field });
        }

        if input.left_offset < 0.0 || input.right_offset < 0.0 {
            return Err(LayoutError::NegativeOffset);
        }

        let min_pin = input.depth * 2.0 / input.slope;
        let pin_at_tip_width = input.pin - min_pin;
        if pin_at_tip_width < 0.0 {
            return Err(LayoutError::PinTooNarrow { min_pin });
        }

        let tail_span = input.length - input.left_offset - input.right_offset + pin_at_tip_width;
        let max_count = (tail_span / (MIN_TAIL_BASE_WIDTH + input.pin)).floor();
        // NaN passes here and later yields no variants
        if max_count < 1.0 {
            return Err(LayoutError::LengthTooShort { tail_span });
        }

        Ok(Self {
            input,
            pin_at_tip_width,
            tail_span,
            max_count,
        })
    }

    /// Validate and enumerate in one step
    pub fn compute(input: &LayoutInput) -> LayoutResult<Vec<LayoutVariant>> {
        Ok(Self::new(*input)?.variants())
    }

    pub fn input(&self) -> &LayoutInput {
        &self.input
    }

    /// Pin width at its narrow end
    pub fn pin_at_tip_width(&self) -> f64 {
        self.pin_at_tip_width
    }

    /// Length shared out between the tails
    pub fn tail_span(&self) -> f64 {
        self.tail_span
    }

    /// Tail count bound; counts strictly below it are enumerated
    pub fn max_count(&self) -> f64 {
        self.max_count
    }

    /// Every layout variant, ordered by increasing tail count.
    ///
    /// Counts run from 1 up to but excluding [`Self::max_count`].
    pub fn variants(&self) -> Vec<LayoutVariant> {
        let limit = self.count_limit();
        let variants: Vec<LayoutVariant> = (1..limit).map(|count| self.variant(count)).collect();

        info!(
            variants = variants.len(),
            max_count = self.max_count,
            pin_at_tip_width = self.pin_at_tip_width,
            "Dovetail layout computed"
        );

        variants
    }

    fn count_limit(&self) -> usize {
        if self.max_count.is_nan() {
            return 0;
        }
        if self.max_count > MAX_TAIL_COUNT as f64 {
            warn!(
                max_count = self.max_count,
                limit = MAX_TAIL_COUNT,
                "Tail count capped"
            );
            return MAX_TAIL_COUNT;
        }
        self.max_count as usize
    }

    fn variant(&self, count: usize) -> LayoutVariant {
        let tail_pitch = self.tail_span / count as f64;
        let left = self.input.left_offset;
        let right = self.input.length - self.input.right_offset;

        let mut stops = Vec::with_capacity(2 * count);
        stops.push(left);
        stops.push(right);
        for i in 1..count {
            let advance = tail_pitch * i as f64;
            stops.push(advance + left);
            stops.push(right - advance);
        }
        stops.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        debug!(tail_count = count, ?stops, "Cut marks");

        LayoutVariant {
            tail_count: count,
            tail_width: tail_pitch - self.pin_at_tip_width,
            pin_at_tip_width: self.pin_at_tip_width,
            stops,
        }
    }
}

/// Compute every dovetail layout variant for `input`
pub fn compute_layout(input: &LayoutInput) -> LayoutResult<Vec<LayoutVariant>> {
    DovetailLayoutCalculator::compute(input)
}
