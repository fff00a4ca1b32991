//! Image resizer stage of a camera ISP
//!
//! Two resizer units, the high-resolution main path and the preview self
//! path, share one engine parameterized by a hardware profile. Pad
//! negotiation feeds the scale planner; stream start programs scale ratios,
//! the interpolation table and the dual-crop window, then commits the
//! double-buffered registers synchronously or at the next frame end.

pub mod common;
pub mod config;
pub mod device;
pub mod dual_crop;
pub mod format;
pub mod hw;
pub mod pad;
pub mod scale;
pub mod shadow;
pub mod unit;


pub use common::{ResizerError, Result};

pub use config::{DeviceConfig, DeviceConfigBuilder};

pub use device::{LocalRegistry, ResizerDevice, SubdevDescriptor, SubdevHandle, SubdevRegistry};

pub use format::{FormatKind, FourCc, IspCodeTable, MbusCode, MbusCodeSource};

pub use hw::{HwProfile, RegisterIo, SimulatedRegisters, MAIN_PATH_PROFILE, SELF_PATH_PROFILE};

pub use pad::{FrameFormat, Pad, PadConfig, Rect, SelectionTarget, Which};

pub use scale::{AxisScale, ScalePlan, ScaleRatios};

pub use shadow::ShadowUpdate;

pub use unit::{MbusCodeEnum, PathId, ResizerUnit, StreamState};
