use std::fmt;

use crate::resizer::common::error::{ResizerError, Result};

/// A media-bus pixel code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MbusCode(pub u32);

impl MbusCode {
    pub const YUYV8_2X8: Self = Self(0x2008);
    pub const YUYV8_1X16: Self = Self(0x2011);
    pub const SBGGR8_1X8: Self = Self(0x3001);
    pub const SGRBG8_1X8: Self = Self(0x3002);
    pub const SGBRG8_1X8: Self = Self(0x3013);
    pub const SRGGB8_1X8: Self = Self(0x3014);
    pub const SBGGR10_1X10: Self = Self(0x3007);
    pub const SGRBG10_1X10: Self = Self(0x300a);
    pub const SGBRG10_1X10: Self = Self(0x300e);
    pub const SRGGB10_1X10: Self = Self(0x300f);
    pub const SBGGR12_1X12: Self = Self(0x3008);
    pub const SGBRG12_1X12: Self = Self(0x3010);
    pub const SGRBG12_1X12: Self = Self(0x3011);
    pub const SRGGB12_1X12: Self = Self(0x3012);
}

impl fmt::Display for MbusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04x}", self.0)
    }
}

/// How the resizer may treat a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    /// Raw sensor data. Never scaled, never cropped on the main path.
    Bayer,
    /// Chroma-subsampled data the scaler understands.
    Yuv,
}

/// Code used when the requested one is unknown.
pub const DEFAULT_CODE: MbusCode = MbusCode::YUYV8_2X8;
pub const DEFAULT_FORMAT_KIND: FormatKind = FormatKind::Yuv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MbusInfo {
    pub code: MbusCode,
    pub kind: FormatKind,
}

const MBUS_TABLE: &[MbusInfo] = &[
    MbusInfo { code: MbusCode::YUYV8_2X8, kind: FormatKind::Yuv },
    MbusInfo { code: MbusCode::YUYV8_1X16, kind: FormatKind::Yuv },
    MbusInfo { code: MbusCode::SRGGB10_1X10, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SBGGR10_1X10, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SGBRG10_1X10, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SGRBG10_1X10, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SRGGB12_1X12, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SBGGR12_1X12, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SGBRG12_1X12, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SGRBG12_1X12, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SRGGB8_1X8, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SBGGR8_1X8, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SGBRG8_1X8, kind: FormatKind::Bayer },
    MbusInfo { code: MbusCode::SGRBG8_1X8, kind: FormatKind::Bayer },
];

pub fn mbus_info(code: MbusCode) -> Option<&'static MbusInfo> {
    MBUS_TABLE.iter().find(|info| info.code == code)
}

/// Upstream pad that owns the list of codes the resizer accepts.
pub trait MbusCodeSource {
    fn enum_mbus_code(&self, pad: u32, index: u32) -> Result<MbusCode>;
}

/// The ISP sink video pad, enumerating every code of the classification table.
#[derive(Debug, Clone, Copy, Default)]
pub struct IspCodeTable;

impl MbusCodeSource for IspCodeTable {
    fn enum_mbus_code(&self, _pad: u32, index: u32) -> Result<MbusCode> {
        MBUS_TABLE
            .get(index as usize)
            .map(|info| info.code)
            .ok_or(ResizerError::EnumerationExhausted(index))
    }
}
