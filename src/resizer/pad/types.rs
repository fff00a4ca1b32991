//! Pad state types

use crate::resizer::format::MbusCode;

/// Resizer pads. The sink faces the ISP, the source faces the capture path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    Sink,
    Source,
}

/// Which copy of the pad state an operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Which {
    /// Scratch copy used while a client negotiates.
    Try,
    /// Copy applied to the hardware on stream start.
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    Crop,
    CropDefault,
    CropBounds,
    Compose,
    ComposeBounds,
}

/// Rectangle with signed offsets, as clients may request negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self { left, top, width, height }
    }

    /// Rectangle covering a whole frame.
    pub fn full(format: &FrameFormat) -> Self {
        Self::new(0, 0, format.width, format.height)
    }

    pub fn covers(&self, format: &FrameFormat) -> bool {
        self.left == 0 && self.top == 0 && self.width == format.width && self.height == format.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub code: MbusCode,
}

impl FrameFormat {
    pub fn new(width: u32, height: u32, code: MbusCode) -> Self {
        Self { width, height, code }
    }
}

/// Formats and crop of both pads. There is no crop on the source pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadConfig {
    pub sink_fmt: FrameFormat,
    pub sink_crop: Rect,
    pub src_fmt: FrameFormat,
}

impl PadConfig {
    pub fn new(width: u32, height: u32, code: MbusCode) -> Self {
        let fmt = FrameFormat::new(width, height, code);
        Self {
            sink_fmt: fmt,
            sink_crop: Rect::full(&fmt),
            src_fmt: fmt,
        }
    }

    pub fn format(&self, pad: Pad) -> &FrameFormat {
        match pad {
            Pad::Sink => &self.sink_fmt,
            Pad::Source => &self.src_fmt,
        }
    }
}
