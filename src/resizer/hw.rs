//! Hardware access module
//!
//! Register map, per-path configuration profiles, the register transport
//! seam and an in-memory register bank that models the shadow double buffer.

pub mod regs;
mod profile;
mod transport;
mod sim;

pub use profile::{CropRegisters, HwProfile, ScalerRegisters, MAIN_PATH_PROFILE, SELF_PATH_PROFILE};
pub use transport::RegisterIo;
pub use sim::{RegWrite, SimulatedRegisters};
