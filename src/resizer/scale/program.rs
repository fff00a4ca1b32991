use tracing::debug;

use crate::resizer::hw::regs::*;
use crate::resizer::hw::{RegisterIo, ScalerRegisters};
use crate::resizer::scale::plan::{AxisScale, ScalePlan, ScaleRatios};
use crate::resizer::shadow::{update_shadow, ShadowUpdate};

/// Turn the scaler off. A synchronous disable is committed right away; an
/// asynchronous one leaves the commit to whatever arms the shadow next.
pub fn disable_scaler<R: RegisterIo>(regs: &mut R, rsz: &ScalerRegisters, when: ShadowUpdate) {
    regs.write(rsz.ctrl, 0);

    if when == ShadowUpdate::Sync {
        update_shadow(regs, rsz, when);
    }
}

/// Write a scale plan to the config bank and commit it.
pub fn program_scaler<R: RegisterIo>(
    regs: &mut R,
    rsz: &ScalerRegisters,
    plan: &ScalePlan,
    when: ShadowUpdate,
) {
    match plan {
        ScalePlan::Bypass => disable_scaler(regs, rsz, when),
        ScalePlan::Scale(ratios) => {
            config_regs(regs, rsz, ratios, when);
            dump_regs(regs, rsz);
        }
    }
}

fn config_regs<R: RegisterIo>(
    regs: &mut R,
    rsz: &ScalerRegisters,
    ratios: &ScaleRatios,
    when: ShadowUpdate,
) {
    // No phase offset
    regs.write(rsz.phase_hy, 0);
    regs.write(rsz.phase_hc, 0);
    regs.write(rsz.phase_vy, 0);
    regs.write(rsz.phase_vc, 0);

    // Linear interpolation
    for i in 0..RSZ_LUT_ENTRIES {
        regs.write(rsz.scale_lut_addr, i);
        regs.write(rsz.scale_lut, i);
    }

    let mut ctrl = 0;
    ctrl |= axis_bits(regs, ratios.hy, RSZ_CTRL_SCALE_HY_ENABLE, RSZ_CTRL_SCALE_HY_UP, &[rsz.scale_hy]);
    ctrl |= axis_bits(
        regs,
        ratios.hc,
        RSZ_CTRL_SCALE_HC_ENABLE,
        RSZ_CTRL_SCALE_HC_UP,
        &[rsz.scale_hcb, rsz.scale_hcr],
    );
    ctrl |= axis_bits(regs, ratios.vy, RSZ_CTRL_SCALE_VY_ENABLE, RSZ_CTRL_SCALE_VY_UP, &[rsz.scale_vy]);
    ctrl |= axis_bits(regs, ratios.vc, RSZ_CTRL_SCALE_VC_ENABLE, RSZ_CTRL_SCALE_VC_UP, &[rsz.scale_vc]);

    regs.write(rsz.ctrl, ctrl);

    update_shadow(regs, rsz, when);
}

/// Write the ratio of one axis and return its control bits.
fn axis_bits<R: RegisterIo>(regs: &mut R, axis: AxisScale, enable: u32, up: u32, targets: &[u32]) -> u32 {
    let Some(ratio) = axis.ratio() else {
        return 0;
    };
    for &addr in targets {
        regs.write(addr, ratio);
    }
    match axis {
        AxisScale::Up(_) => enable | up,
        _ => enable,
    }
}

/// Log every scaler register as `config/shadow`.
pub fn dump_regs<R: RegisterIo>(regs: &R, rsz: &ScalerRegisters) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    for (name, config, shadow) in rsz.shadow_pairs() {
        if config == rsz.ctrl {
            debug!("RSZ_{} 0x{:08x}/0x{:08x}", name, regs.read(config), regs.read(shadow));
        } else {
            debug!("RSZ_{} {}/{}", name, regs.read(config), regs.read(shadow));
        }
    }
}
