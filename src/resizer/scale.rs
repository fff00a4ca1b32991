//! Scaling module
//!
//! Planning of the luma/chroma scale ratios and their programming into the
//! scaler registers.

mod plan;
mod program;

pub use plan::{calc_ratio, plan_scaling, AxisScale, ScalePlan, ScaleRatios, Size};
pub use program::{disable_scaler, dump_regs, program_scaler};
