//! Dual-crop unit.
//!
//! Trims the ISP output in front of the scaler. Its control register is
//! shared by both paths; each path owns its own mode bits.

use tracing::debug;

use crate::resizer::hw::regs::{DUAL_CROP_CFG_UPD, DUAL_CROP_GEN_CFG_UPD};
use crate::resizer::hw::{CropRegisters, RegisterIo};
use crate::resizer::pad::{FrameFormat, Rect};
use crate::resizer::shadow::ShadowUpdate;

pub fn disable_dual_crop<R: RegisterIo>(regs: &mut R, dc: &CropRegisters, when: ShadowUpdate) {
    let mut ctrl = regs.read(dc.ctrl);

    ctrl &= !(dc.yuvmode_mask | dc.rawmode_mask);
    ctrl |= match when {
        ShadowUpdate::Async => DUAL_CROP_GEN_CFG_UPD,
        ShadowUpdate::Sync => DUAL_CROP_CFG_UPD,
    };
    regs.write(dc.ctrl, ctrl);
}

/// Program the crop of the sink pad, or disable the unit when the crop
/// covers the whole sink frame.
pub fn configure_dual_crop<R: RegisterIo>(
    regs: &mut R,
    dc: &CropRegisters,
    sink_fmt: &FrameFormat,
    sink_crop: &Rect,
) {
    if sink_crop.covers(sink_fmt) {
        disable_dual_crop(regs, dc, ShadowUpdate::Sync);
        debug!("crop disabled");
        return;
    }

    let mut ctrl = regs.read(dc.ctrl);
    regs.write(dc.h_offset, sink_crop.left as u32);
    regs.write(dc.v_offset, sink_crop.top as u32);
    regs.write(dc.h_size, sink_crop.width);
    regs.write(dc.v_size, sink_crop.height);
    ctrl |= dc.yuvmode_mask;
    ctrl |= DUAL_CROP_CFG_UPD;
    regs.write(dc.ctrl, ctrl);

    debug!(
        "crop: {}x{} -> {}x{}",
        sink_fmt.width, sink_fmt.height, sink_crop.width, sink_crop.height
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resizer::format::MbusCode;
    use crate::resizer::hw::regs::*;
    use crate::resizer::hw::{SimulatedRegisters, MAIN_PATH_PROFILE, SELF_PATH_PROFILE};

    const MP: CropRegisters = MAIN_PATH_PROFILE.dual_crop;
    const SP: CropRegisters = SELF_PATH_PROFILE.dual_crop;

    fn sink() -> FrameFormat {
        FrameFormat::new(1920, 1080, MbusCode::YUYV8_2X8)
    }

    #[test]
    fn test_full_crop_disables_with_sync_bit() {
        let mut regs = SimulatedRegisters::new();
        regs.write(DUAL_CROP_CTRL, DUAL_CROP_MP_MODE_YUV | DUAL_CROP_SP_MODE_YUV);
        regs.clear_log();

        configure_dual_crop(&mut regs, &MP, &sink(), &Rect::full(&sink()));

        assert_eq!(regs.writes().len(), 1);
        assert_eq!(regs.read(DUAL_CROP_CTRL), DUAL_CROP_SP_MODE_YUV | DUAL_CROP_CFG_UPD);
    }

    #[test]
    fn test_partial_crop_programs_window() {
        let mut regs = SimulatedRegisters::new();
        configure_dual_crop(&mut regs, &SP, &sink(), &Rect::new(100, 50, 1280, 720));

        assert_eq!(regs.read(DUAL_CROP_S_H_OFFS), 100);
        assert_eq!(regs.read(DUAL_CROP_S_V_OFFS), 50);
        assert_eq!(regs.read(DUAL_CROP_S_H_SIZE), 1280);
        assert_eq!(regs.read(DUAL_CROP_S_V_SIZE), 720);
        assert_eq!(regs.read(DUAL_CROP_CTRL), DUAL_CROP_SP_MODE_YUV | DUAL_CROP_CFG_UPD);
        // main path windows untouched
        assert!(regs.writes_to(DUAL_CROP_M_H_SIZE).is_empty());
    }

    #[test]
    fn test_disable_bits_differ_by_mode() {
        let mut sync = SimulatedRegisters::new();
        let mut async_ = SimulatedRegisters::new();
        disable_dual_crop(&mut sync, &MP, ShadowUpdate::Sync);
        disable_dual_crop(&mut async_, &MP, ShadowUpdate::Async);

        assert_eq!(sync.read(DUAL_CROP_CTRL), DUAL_CROP_CFG_UPD);
        assert_eq!(async_.read(DUAL_CROP_CTRL), DUAL_CROP_GEN_CFG_UPD);
    }

    #[test]
    fn test_disable_clears_raw_and_yuv_bits_of_own_path_only() {
        let mut regs = SimulatedRegisters::new();
        regs.write(
            DUAL_CROP_CTRL,
            DUAL_CROP_MP_MODE_YUV | DUAL_CROP_MP_MODE_RAW | DUAL_CROP_SP_MODE_RAW,
        );
        disable_dual_crop(&mut regs, &MP, ShadowUpdate::Async);
        assert_eq!(regs.read(DUAL_CROP_CTRL), DUAL_CROP_SP_MODE_RAW | DUAL_CROP_GEN_CFG_UPD);
    }
}
