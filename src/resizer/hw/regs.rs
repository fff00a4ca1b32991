//! Register addresses and bit fields of the resizer and dual-crop blocks.

/// Fixed-point denominator of the scale ratio registers.
pub const RSZ_SCALER_FACTOR: u32 = 1 << 16;

/// Number of entries in the scaler interpolation lookup table.
pub const RSZ_LUT_ENTRIES: u32 = 64;

// Scaler control word
pub const RSZ_CTRL_SCALE_HY_ENABLE: u32 = 1 << 0;
pub const RSZ_CTRL_SCALE_HC_ENABLE: u32 = 1 << 1;
pub const RSZ_CTRL_SCALE_VY_ENABLE: u32 = 1 << 2;
pub const RSZ_CTRL_SCALE_VC_ENABLE: u32 = 1 << 3;
pub const RSZ_CTRL_SCALE_HY_UP: u32 = 1 << 4;
pub const RSZ_CTRL_SCALE_HC_UP: u32 = 1 << 5;
pub const RSZ_CTRL_SCALE_VY_UP: u32 = 1 << 6;
pub const RSZ_CTRL_SCALE_VC_UP: u32 = 1 << 7;
pub const RSZ_CTRL_CFG_UPD: u32 = 1 << 8;
pub const RSZ_CTRL_CFG_UPD_AUTO: u32 = 1 << 9;

// Dual-crop control word
pub const DUAL_CROP_MP_MODE_YUV: u32 = 1 << 0;
pub const DUAL_CROP_MP_MODE_RAW: u32 = 1 << 1;
pub const DUAL_CROP_SP_MODE_YUV: u32 = 1 << 2;
pub const DUAL_CROP_SP_MODE_RAW: u32 = 1 << 3;
pub const DUAL_CROP_CFG_UPD: u32 = 1 << 5;
pub const DUAL_CROP_GEN_CFG_UPD: u32 = 1 << 6;

// Scaler register layout, relative to the block base
pub const RSZ_CTRL: u32 = 0x00;
pub const RSZ_SCALE_HY: u32 = 0x04;
pub const RSZ_SCALE_HCB: u32 = 0x08;
pub const RSZ_SCALE_HCR: u32 = 0x0c;
pub const RSZ_SCALE_VY: u32 = 0x10;
pub const RSZ_SCALE_VC: u32 = 0x14;
pub const RSZ_PHASE_HY: u32 = 0x18;
pub const RSZ_PHASE_HC: u32 = 0x1c;
pub const RSZ_PHASE_VY: u32 = 0x20;
pub const RSZ_PHASE_VC: u32 = 0x24;
pub const RSZ_SCALE_LUT_ADDR: u32 = 0x28;
pub const RSZ_SCALE_LUT: u32 = 0x2c;
pub const RSZ_CTRL_SHD: u32 = 0x30;
pub const RSZ_SCALE_HY_SHD: u32 = 0x34;
pub const RSZ_SCALE_HCB_SHD: u32 = 0x38;
pub const RSZ_SCALE_HCR_SHD: u32 = 0x3c;
pub const RSZ_SCALE_VY_SHD: u32 = 0x40;
pub const RSZ_SCALE_VC_SHD: u32 = 0x44;
pub const RSZ_PHASE_HY_SHD: u32 = 0x48;
pub const RSZ_PHASE_HC_SHD: u32 = 0x4c;
pub const RSZ_PHASE_VY_SHD: u32 = 0x50;
pub const RSZ_PHASE_VC_SHD: u32 = 0x54;

pub const MRSZ_BASE: u32 = 0x0000_0c00;
pub const SRSZ_BASE: u32 = 0x0000_1000;

// Dual-crop block
pub const DUAL_CROP_BASE: u32 = 0x0000_2880;
pub const DUAL_CROP_CTRL: u32 = DUAL_CROP_BASE;
pub const DUAL_CROP_M_H_OFFS: u32 = DUAL_CROP_BASE + 0x04;
pub const DUAL_CROP_M_V_OFFS: u32 = DUAL_CROP_BASE + 0x08;
pub const DUAL_CROP_M_H_SIZE: u32 = DUAL_CROP_BASE + 0x0c;
pub const DUAL_CROP_M_V_SIZE: u32 = DUAL_CROP_BASE + 0x10;
pub const DUAL_CROP_S_H_OFFS: u32 = DUAL_CROP_BASE + 0x14;
pub const DUAL_CROP_S_V_OFFS: u32 = DUAL_CROP_BASE + 0x18;
pub const DUAL_CROP_S_H_SIZE: u32 = DUAL_CROP_BASE + 0x1c;
pub const DUAL_CROP_S_V_SIZE: u32 = DUAL_CROP_BASE + 0x20;

// Output size limits
pub const RSZ_MP_SRC_MAX_WIDTH: u32 = 4416;
pub const RSZ_MP_SRC_MAX_HEIGHT: u32 = 3312;
pub const RSZ_SP_SRC_MAX_WIDTH: u32 = 1920;
pub const RSZ_SP_SRC_MAX_HEIGHT: u32 = 1920;
pub const RSZ_SRC_MIN_WIDTH: u32 = 32;
pub const RSZ_SRC_MIN_HEIGHT: u32 = 16;
