//! Per-path hardware configuration profiles.
//!
//! Both resizers share one engine; everything that differs between the main
//! path and the self path lives in an immutable [`HwProfile`] value.

use crate::resizer::hw::regs::*;

/// Scaler register addresses of one path, config bank and shadow bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalerRegisters {
    pub ctrl: u32,
    pub scale_hy: u32,
    pub scale_hcr: u32,
    pub scale_hcb: u32,
    pub scale_vy: u32,
    pub scale_vc: u32,
    pub scale_lut: u32,
    pub scale_lut_addr: u32,
    pub phase_hy: u32,
    pub phase_hc: u32,
    pub phase_vy: u32,
    pub phase_vc: u32,
    pub ctrl_shd: u32,
    pub scale_hy_shd: u32,
    pub scale_hcr_shd: u32,
    pub scale_hcb_shd: u32,
    pub scale_vy_shd: u32,
    pub scale_vc_shd: u32,
    pub phase_hy_shd: u32,
    pub phase_hc_shd: u32,
    pub phase_vy_shd: u32,
    pub phase_vc_shd: u32,
}

impl ScalerRegisters {
    const fn at(base: u32) -> Self {
        Self {
            ctrl: base + RSZ_CTRL,
            scale_hy: base + RSZ_SCALE_HY,
            scale_hcr: base + RSZ_SCALE_HCR,
            scale_hcb: base + RSZ_SCALE_HCB,
            scale_vy: base + RSZ_SCALE_VY,
            scale_vc: base + RSZ_SCALE_VC,
            scale_lut: base + RSZ_SCALE_LUT,
            scale_lut_addr: base + RSZ_SCALE_LUT_ADDR,
            phase_hy: base + RSZ_PHASE_HY,
            phase_hc: base + RSZ_PHASE_HC,
            phase_vy: base + RSZ_PHASE_VY,
            phase_vc: base + RSZ_PHASE_VC,
            ctrl_shd: base + RSZ_CTRL_SHD,
            scale_hy_shd: base + RSZ_SCALE_HY_SHD,
            scale_hcr_shd: base + RSZ_SCALE_HCR_SHD,
            scale_hcb_shd: base + RSZ_SCALE_HCB_SHD,
            scale_vy_shd: base + RSZ_SCALE_VY_SHD,
            scale_vc_shd: base + RSZ_SCALE_VC_SHD,
            phase_hy_shd: base + RSZ_PHASE_HY_SHD,
            phase_hc_shd: base + RSZ_PHASE_HC_SHD,
            phase_vy_shd: base + RSZ_PHASE_VY_SHD,
            phase_vc_shd: base + RSZ_PHASE_VC_SHD,
        }
    }

    /// `(config, shadow)` address pairs swapped by a commit.
    pub fn shadow_pairs(&self) -> [(&'static str, u32, u32); 10] {
        [
            ("CTRL", self.ctrl, self.ctrl_shd),
            ("SCALE_HY", self.scale_hy, self.scale_hy_shd),
            ("SCALE_HCB", self.scale_hcb, self.scale_hcb_shd),
            ("SCALE_HCR", self.scale_hcr, self.scale_hcr_shd),
            ("SCALE_VY", self.scale_vy, self.scale_vy_shd),
            ("SCALE_VC", self.scale_vc, self.scale_vc_shd),
            ("PHASE_HY", self.phase_hy, self.phase_hy_shd),
            ("PHASE_HC", self.phase_hc, self.phase_hc_shd),
            ("PHASE_VY", self.phase_vy, self.phase_vy_shd),
            ("PHASE_VC", self.phase_vc, self.phase_vc_shd),
        ]
    }
}

/// Dual-crop register addresses and mode masks of one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegisters {
    pub ctrl: u32,
    pub yuvmode_mask: u32,
    pub rawmode_mask: u32,
    pub h_offset: u32,
    pub v_offset: u32,
    pub h_size: u32,
    pub v_size: u32,
}

/// Immutable description of one resizer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HwProfile {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    pub rsz: ScalerRegisters,
    pub dual_crop: CropRegisters,
}

impl HwProfile {
    pub fn clamp_width(&self, width: u32) -> u32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn clamp_height(&self, height: u32) -> u32 {
        height.clamp(self.min_height, self.max_height)
    }
}

pub const MAIN_PATH_PROFILE: HwProfile = HwProfile {
    min_width: RSZ_SRC_MIN_WIDTH,
    min_height: RSZ_SRC_MIN_HEIGHT,
    max_width: RSZ_MP_SRC_MAX_WIDTH,
    max_height: RSZ_MP_SRC_MAX_HEIGHT,
    rsz: ScalerRegisters::at(MRSZ_BASE),
    dual_crop: CropRegisters {
        ctrl: DUAL_CROP_CTRL,
        yuvmode_mask: DUAL_CROP_MP_MODE_YUV,
        rawmode_mask: DUAL_CROP_MP_MODE_RAW,
        h_offset: DUAL_CROP_M_H_OFFS,
        v_offset: DUAL_CROP_M_V_OFFS,
        h_size: DUAL_CROP_M_H_SIZE,
        v_size: DUAL_CROP_M_V_SIZE,
    },
};

pub const SELF_PATH_PROFILE: HwProfile = HwProfile {
    min_width: RSZ_SRC_MIN_WIDTH,
    min_height: RSZ_SRC_MIN_HEIGHT,
    max_width: RSZ_SP_SRC_MAX_WIDTH,
    max_height: RSZ_SP_SRC_MAX_HEIGHT,
    rsz: ScalerRegisters::at(SRSZ_BASE),
    dual_crop: CropRegisters {
        ctrl: DUAL_CROP_CTRL,
        yuvmode_mask: DUAL_CROP_SP_MODE_YUV,
        rawmode_mask: DUAL_CROP_SP_MODE_RAW,
        h_offset: DUAL_CROP_S_H_OFFS,
        v_offset: DUAL_CROP_S_V_OFFS,
        h_size: DUAL_CROP_S_H_SIZE,
        v_size: DUAL_CROP_S_V_SIZE,
    },
};
