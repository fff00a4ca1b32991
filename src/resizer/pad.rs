//! Pad state module
//!
//! Formats and crop rectangles negotiated on the two resizer pads.

mod crop;
pub mod types;

pub use crop::{adjust_crop, align_even, MIN_CROP_SIZE};
pub use types::{FrameFormat, Pad, PadConfig, Rect, SelectionTarget, Which};
