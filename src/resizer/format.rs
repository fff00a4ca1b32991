//! Pixel format classification
//!
//! Media-bus codes travelling between the ISP and the resizer, and the
//! memory formats of the capture path that decide chroma subsampling.

mod mbus;
mod pixel;

pub use mbus::{
    mbus_info, FormatKind, IspCodeTable, MbusCode, MbusCodeSource, MbusInfo, DEFAULT_CODE,
    DEFAULT_FORMAT_KIND,
};
pub use pixel::{ChromaDivisors, FourCc, SINK_CHROMA_DIVISORS};
