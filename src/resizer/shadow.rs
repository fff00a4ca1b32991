//! Shadow register commit.
//!
//! Scaler registers are double buffered. A commit either swaps the config
//! bank in right away or arms the swap for the next frame end.

use crate::resizer::hw::regs::{RSZ_CTRL_CFG_UPD, RSZ_CTRL_CFG_UPD_AUTO};
use crate::resizer::hw::{RegisterIo, ScalerRegisters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowUpdate {
    /// Apply now. Only safe when no other path has a frame in flight.
    Sync,
    /// Apply at the next vertical sync.
    Async,
}

pub fn update_shadow<R: RegisterIo>(regs: &mut R, rsz: &ScalerRegisters, when: ShadowUpdate) {
    let mut ctrl = regs.read(rsz.ctrl);
    ctrl |= match when {
        ShadowUpdate::Async => RSZ_CTRL_CFG_UPD_AUTO,
        ShadowUpdate::Sync => RSZ_CTRL_CFG_UPD,
    };
    regs.write(rsz.ctrl, ctrl);
}
