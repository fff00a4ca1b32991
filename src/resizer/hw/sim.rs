//! In-memory register bank.
//!
//! Models the scaler double buffer: writes land in the config bank and reach
//! the shadow bank only when a commit is requested. `CFG_UPD` copies at once
//! and self-clears; `CFG_UPD_AUTO` copies on the next
//! [`SimulatedRegisters::frame_end`] and is cleared once consumed.

use std::collections::HashMap;

use tracing::trace;

use crate::resizer::hw::profile::{ScalerRegisters, MAIN_PATH_PROFILE, SELF_PATH_PROFILE};
use crate::resizer::hw::regs::{RSZ_CTRL_CFG_UPD, RSZ_CTRL_CFG_UPD_AUTO};
use crate::resizer::hw::transport::RegisterIo;

/// A single recorded register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegWrite {
    pub addr: u32,
    pub value: u32,
}

#[derive(Debug, Clone)]
pub struct SimulatedRegisters {
    values: HashMap<u32, u32>,
    writes: Vec<RegWrite>,
    scalers: Vec<ScalerRegisters>,
}

impl Default for SimulatedRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedRegisters {
    /// Bank with both resizer blocks wired for shadow updates.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            writes: Vec::new(),
            scalers: vec![MAIN_PATH_PROFILE.rsz, SELF_PATH_PROFILE.rsz],
        }
    }

    /// Every write since construction or the last [`clear_log`](Self::clear_log), in order.
    pub fn writes(&self) -> &[RegWrite] {
        &self.writes
    }

    /// Values written to `addr`, in order.
    pub fn writes_to(&self, addr: u32) -> Vec<u32> {
        self.writes
            .iter()
            .filter(|w| w.addr == addr)
            .map(|w| w.value)
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
    }

    /// Vertical sync: scalers armed with `CFG_UPD_AUTO` latch their config bank.
    pub fn frame_end(&mut self) {
        let armed: Vec<ScalerRegisters> = self
            .scalers
            .iter()
            .filter(|rsz| self.peek(rsz.ctrl) & RSZ_CTRL_CFG_UPD_AUTO != 0)
            .copied()
            .collect();
        for rsz in armed {
            self.latch(&rsz);
            let ctrl = self.peek(rsz.ctrl) & !RSZ_CTRL_CFG_UPD_AUTO;
            self.values.insert(rsz.ctrl, ctrl);
        }
    }

    fn peek(&self, addr: u32) -> u32 {
        self.values.get(&addr).copied().unwrap_or(0)
    }

    fn latch(&mut self, rsz: &ScalerRegisters) {
        for (name, config, shadow) in rsz.shadow_pairs() {
            let mut value = self.peek(config);
            if config == rsz.ctrl {
                value &= !(RSZ_CTRL_CFG_UPD | RSZ_CTRL_CFG_UPD_AUTO);
            }
            trace!("latch {} 0x{:04x} -> 0x{:04x} = 0x{:08x}", name, config, shadow, value);
            self.values.insert(shadow, value);
        }
    }
}

impl RegisterIo for SimulatedRegisters {
    fn read(&self, addr: u32) -> u32 {
        self.peek(addr)
    }

    fn write(&mut self, addr: u32, value: u32) {
        self.writes.push(RegWrite { addr, value });
        self.values.insert(addr, value);

        let Some(rsz) = self.scalers.iter().find(|rsz| rsz.ctrl == addr).copied() else {
            return;
        };
        if value & RSZ_CTRL_CFG_UPD != 0 {
            self.latch(&rsz);
            self.values.insert(addr, value & !RSZ_CTRL_CFG_UPD);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_update_latches_immediately_and_self_clears() {
        let rsz = MAIN_PATH_PROFILE.rsz;
        let mut regs = SimulatedRegisters::new();
        regs.write(rsz.scale_hy, 1234);
        assert_eq!(regs.read(rsz.scale_hy_shd), 0);

        regs.write(rsz.ctrl, 0x1 | RSZ_CTRL_CFG_UPD);
        assert_eq!(regs.read(rsz.scale_hy_shd), 1234);
        assert_eq!(regs.read(rsz.ctrl_shd), 0x1);
        assert_eq!(regs.read(rsz.ctrl), 0x1);
    }

    #[test]
    fn test_auto_update_waits_for_frame_end() {
        let rsz = SELF_PATH_PROFILE.rsz;
        let mut regs = SimulatedRegisters::new();
        regs.write(rsz.scale_vy, 42);
        regs.write(rsz.ctrl, 0x4 | RSZ_CTRL_CFG_UPD_AUTO);
        assert_eq!(regs.read(rsz.scale_vy_shd), 0);

        regs.frame_end();
        assert_eq!(regs.read(rsz.scale_vy_shd), 42);
        assert_eq!(regs.read(rsz.ctrl_shd), 0x4);
        assert_eq!(regs.read(rsz.ctrl), 0x4);
        // the main path was never armed
        assert_eq!(regs.read(MAIN_PATH_PROFILE.rsz.ctrl_shd), 0);
    }

    #[test]
    fn test_consumed_auto_update_does_not_latch_again() {
        let rsz = MAIN_PATH_PROFILE.rsz;
        let mut regs = SimulatedRegisters::new();
        regs.write(rsz.ctrl, 0x1 | RSZ_CTRL_CFG_UPD_AUTO);
        regs.frame_end();
        assert_eq!(regs.read(rsz.ctrl), 0x1);

        regs.write(rsz.scale_hy, 77);
        regs.frame_end();
        assert_eq!(regs.read(rsz.scale_hy_shd), 0);
    }

    #[test]
    fn test_write_log_records_order() {
        let mut regs = SimulatedRegisters::new();
        regs.write(0x10, 1);
        regs.write(0x20, 2);
        regs.write(0x10, 3);
        assert_eq!(regs.writes().len(), 3);
        assert_eq!(regs.writes_to(0x10), vec![1, 3]);
        regs.clear_log();
        assert!(regs.writes().is_empty());
        assert_eq!(regs.read(0x10), 3);
    }
}
