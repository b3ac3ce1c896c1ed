//! # DovetailKit CAM Tools
//!
//! Layout tools that turn a handful of board measurements into marking
//! positions for hand-cut joinery.
//!
//! ## Tools Included
//!
//! - **Dovetail Layout Calculator**: Enumerates feasible tail counts for a board
//!   and the sorted cut-mark positions each count implies
//! - **Layout Form**: Raw text fields as typed by the user, parsed into a
//!   [`LayoutInput`]
//! - **Layout Report**: Immutable result of one calculation, serializable to JSON

pub mod dovetail_layout;
pub mod error;
pub mod report;

pub use dovetail_layout::{
    compute_layout, parse_field, DovetailLayoutCalculator, LayoutField, LayoutForm, LayoutInput,
    LayoutVariant, MAX_TAIL_COUNT, MIN_TAIL_BASE_WIDTH,
};
pub use error::{CamToolError, CamToolResult, LayoutError, LayoutResult};
pub use report::{ErrorReport, LayoutOutcome, LayoutReport};
