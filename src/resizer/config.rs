//! Device configuration types

use crate::resizer::format::{FourCc, MbusCode, DEFAULT_CODE};
use crate::resizer::pad::MIN_CROP_SIZE;

/// Defaults applied when the pads are initialized.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Width of both pads after initialization
    pub default_width: u32,
    /// Height of both pads after initialization
    pub default_height: u32,
    /// Media-bus code of both pads after initialization
    pub default_code: MbusCode,
    /// Memory format assumed for each capture path until told otherwise
    pub default_capture_format: FourCc,
    /// Smallest crop rectangle accepted on the sink pad, at least 2x2
    pub min_crop_width: u32,
    pub min_crop_height: u32,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            default_width: 800,
            default_height: 600,
            default_code: DEFAULT_CODE,
            default_capture_format: FourCc::YUYV,
            min_crop_width: 32,
            min_crop_height: 32,
        }
    }
}

impl DeviceConfig {
    pub fn builder() -> DeviceConfigBuilder {
        DeviceConfigBuilder::default()
    }
}

/// Builder for DeviceConfig
#[derive(Default)]
pub struct DeviceConfigBuilder {
    default_width: Option<u32>,
    default_height: Option<u32>,
    default_code: Option<MbusCode>,
    default_capture_format: Option<FourCc>,
    min_crop_width: Option<u32>,
    min_crop_height: Option<u32>,
}

impl DeviceConfigBuilder {
    pub fn default_size(mut self, width: u32, height: u32) -> Self {
        self.default_width = Some(width);
        self.default_height = Some(height);
        self
    }

    pub fn default_code(mut self, code: MbusCode) -> Self {
        self.default_code = Some(code);
        self
    }

    pub fn default_capture_format(mut self, fourcc: FourCc) -> Self {
        self.default_capture_format = Some(fourcc);
        self
    }

    pub fn min_crop(mut self, width: u32, height: u32) -> Self {
        self.min_crop_width = Some(width);
        self.min_crop_height = Some(height);
        self
    }

    pub fn build(self) -> DeviceConfig {
        let default = DeviceConfig::default();
        DeviceConfig {
            default_width: self.default_width.unwrap_or(default.default_width),
            default_height: self.default_height.unwrap_or(default.default_height),
            default_code: self.default_code.unwrap_or(default.default_code),
            default_capture_format: self.default_capture_format.unwrap_or(default.default_capture_format),
            min_crop_width: self
                .min_crop_width
                .unwrap_or(default.min_crop_width)
                .max(MIN_CROP_SIZE),
            min_crop_height: self
                .min_crop_height
                .unwrap_or(default.min_crop_height)
                .max(MIN_CROP_SIZE),
        }
    }
}
